use super::charts::{LocationRevenueList, ProjectionsChart, RevenueChart, TotalSalesDonut};
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d001_ecommerce::{mock, stat_cards, HomeData, TopProduct};
use contracts::shared::format::{format_currency, format_integer};
use leptos::prelude::*;
use thaw::*;

#[component]
fn TopProductsTable(products: Vec<TopProduct>) -> impl IntoView {
    view! {
        <div class="chart-card chart-card--wide">
            <div class="chart-card__header">
                <h3 class="chart-card__title">"Top Selling Products"</h3>
            </div>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Price"</TableHeaderCell>
                        <TableHeaderCell>"Quantity"</TableHeaderCell>
                        <TableHeaderCell>"Amount"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {products
                        .into_iter()
                        .map(|product| view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout truncate=true>{product.name}</TableCellLayout>
                                </TableCell>
                                <TableCell>{format_currency(product.price)}</TableCell>
                                <TableCell>{format_integer(product.quantity.into())}</TableCell>
                                <TableCell>{format_currency(product.amount)}</TableCell>
                            </TableRow>
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
fn DashboardBody(data: HomeData) -> impl IntoView {
    let cards = stat_cards(&data.stats, &data.stat_changes);
    let share = data.leading_channel_share();

    view! {
        <div class="stats-grid">
            {cards.into_iter().map(|card| view! { <StatCard card=card /> }).collect_view()}
        </div>

        <div class="charts-row">
            <ProjectionsChart points=data.projections />
            <RevenueChart points=data.revenue totals=data.revenue_totals />
            <LocationRevenueList locations=data.revenue_by_location />
        </div>

        <div class="charts-row charts-row--bottom">
            <TopProductsTable products=data.top_products />
            <TotalSalesDonut channels=data.sales_breakdown share=share />
        </div>
    }
}

/// Home view: headline numbers and static charts of the eCommerce store.
#[component]
pub fn EcommerceDashboard() -> impl IntoView {
    let content = match mock::home_data() {
        Ok(data) => {
            log::debug!("home data loaded: {} products", data.top_products.len());
            view! { <DashboardBody data=data /> }.into_any()
        }
        Err(e) => {
            log::error!("failed to load home data: {:#}", e);
            view! {
                <div class="alert alert--error">{format!("Dashboard data unavailable: {}", e)}</div>
            }
            .into_any()
        }
    };

    view! {
        <PageFrame page_id="d001_ecommerce--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"eCommerce"</h1>
                </div>
            </div>
            <div class="page__content">
                {content}
            </div>
        </PageFrame>
    }
}
