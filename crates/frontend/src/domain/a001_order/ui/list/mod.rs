pub mod state;

use self::state::create_state;
use super::details::OrderDetails;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_order::{mock, OrderRecord, OrderSortKey, StatusFilter};
use contracts::shared::config::DashboardConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLE_ID: &str = "a001-order-table";
const COLUMN_COUNT: &str = "7";
const PAGES: [u32; 5] = [1, 2, 3, 4, 5];

/// Orders view: searchable, filterable, sortable table with row selection and
/// a detail overlay.
#[component]
pub fn OrdersList() -> impl IntoView {
    let state = create_state();
    let load_delay_ms = use_context::<DashboardConfig>()
        .map(|config| config.orders.load_delay_ms)
        .unwrap_or(1000);

    // Simulated fetch: one delayed transition to Loaded per mount.
    spawn_local(async move {
        TimeoutFuture::new(load_delay_ms).await;
        let applied = match mock::orders() {
            Ok(orders) => {
                let count = orders.len();
                let applied = state.try_update(|s| s.finish_loading(orders));
                log::info!("orders loaded: {}", count);
                applied.is_some()
            }
            Err(e) => {
                log::error!("failed to load orders: {:#}", e);
                state
                    .try_update(|s| s.fail_loading(e.to_string()))
                    .is_some()
            }
        };
        if !applied {
            log::debug!("orders view closed before the load finished");
        }
    });

    let search_query = RwSignal::new(String::new());
    Effect::new(move || {
        let v = search_query.get();
        untrack(move || {
            state.update(|s| s.query.search_term = v);
        });
    });

    let status_code = RwSignal::new(StatusFilter::All.code().to_string());
    Effect::new(move || {
        let filter = StatusFilter::from_code(&status_code.get());
        untrack(move || {
            state.update(|s| s.query.status_filter = filter);
        });
    });

    let filtered = Memo::new(move |_| state.with(|s| s.filtered()));
    let search_term = move || state.with(|s| s.query.search_term.clone());

    let sort_by = Signal::derive(move || state.with(|s| s.query.sort_by));
    let sort_order = Signal::derive(move || state.with(|s| s.query.sort_order));
    let toggle_sort = Callback::new(move |key: OrderSortKey| {
        state.update(|s| s.query.toggle_sort(key));
    });
    let flip_sort_order = move |_| {
        state.update(|s| {
            let key = s.query.sort_by;
            s.query.toggle_sort(key);
        });
    };

    let header_checkbox = Signal::derive(move || state.with(|s| s.header_checkbox()));
    let select_all = Callback::new(move |_: ()| state.update(|s| s.select_all()));
    let selected_count = move || state.with(|s| s.selection.len());

    let current_order = Memo::new(move |_| state.with(|s| s.overlay.current().cloned()));
    let open_order = move |order: OrderRecord| {
        log::debug!("opening order {}", order.id);
        state.update(|s| s.overlay.open(order));
    };
    let close_order = Callback::new(move |_: ()| state.update(|s| s.overlay.close()));

    let is_loading = move || state.with(|s| s.phase.is_loading());
    let is_empty = move || !is_loading() && filtered.with(|f| f.is_empty());
    let load_error = move || state.with(|s| s.error.clone());

    view! {
        <PageFrame page_id="a001_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <button class="top-header__icon-btn">{icon("list")}</button>
                    <button class="top-header__icon-btn">{icon("star")}</button>
                    <h1 class="page__title">"Order List"</h1>
                    <Show when=move || { selected_count() > 0 }>
                        <span class="badge badge--primary">
                            {move || format!("{} selected", selected_count())}
                        </span>
                    </Show>
                </div>
            </div>

            <div class="page__content">
                <div class="action-bar">
                    <div class="action-bar__left">
                        <button class="action-bar__btn" title="Add order">{icon("plus")}</button>
                        <button class="action-bar__btn" title="Filter">{icon("equal")}</button>
                        <button class="action-bar__btn" title="Reverse sort order" on:click=flip_sort_order>
                            {icon("arrow-up-down")}
                        </button>
                    </div>

                    <div class="action-bar__right">
                        <Select value=status_code>
                            {StatusFilter::options()
                                .into_iter()
                                .map(|option| view! {
                                    <option value=option.code()>{option.label()}</option>
                                })
                                .collect_view()}
                        </Select>
                        <div class="action-bar__search">
                            {icon("search")}
                            <Input value=search_query placeholder="Search" />
                        </div>
                    </div>
                </div>

                {move || load_error().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox state=header_checkbox on_toggle=select_all />
                                {OrderSortKey::all()
                                    .into_iter()
                                    .map(|key| view! {
                                        <SortableHeaderCell
                                            label=key.label()
                                            sort_key=key
                                            current_key=sort_by
                                            sort_order=sort_order
                                            on_sort=toggle_sort
                                        />
                                    })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <Show when=is_loading>
                                <TableRow>
                                    <TableCell attr:colspan=COLUMN_COUNT class="table__loading-row">
                                        <div class="loading-spinner">
                                            {icon("refresh")}
                                            <span>"Loading orders..."</span>
                                        </div>
                                    </TableCell>
                                </TableRow>
                            </Show>

                            <Show when=is_empty>
                                <TableRow>
                                    <TableCell attr:colspan=COLUMN_COUNT class="table__empty-row">
                                        <div class="empty-state">
                                            <div class="empty-state__icon">{icon("credit-card")}</div>
                                            <h3>"No orders found"</h3>
                                            <p>"Try adjusting your search criteria"</p>
                                        </div>
                                    </TableCell>
                                </TableRow>
                            </Show>

                            <For
                                each=move || filtered.get()
                                key=|order| order.id.clone()
                                children=move |order| {
                                    let id = order.id.clone();
                                    let id_for_toggle = id.clone();
                                    let id_text = order.id.clone();
                                    let user = order.user.clone();
                                    let project = order.project.clone();
                                    let color = order.status.color();
                                    let has_document = order.has_document;
                                    let has_calendar = order.has_calendar;
                                    let address = order.address.clone();
                                    let date = order.date.clone();
                                    let avatar = order.avatar.clone();
                                    let status_name = order.status.display_name();

                                    view! {
                                        <TableRow class="table__row--clickable" on:click=move |_| open_order(order.clone())>
                                            <TableCellCheckbox
                                                checked=Signal::derive(move || state.with(|s| s.selection.contains(&id)))
                                                on_toggle=Callback::new(move |_: ()| {
                                                    state.update(|s| s.selection.toggle(&id_for_toggle));
                                                })
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="order-id">
                                                        {move || highlight_matches(&id_text, &search_term())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="avatar avatar--small">{avatar}</span>
                                                    {move || highlight_matches(&user, &search_term())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&project, &search_term())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {icon("map-pin")}
                                                    <span>{address}</span>
                                                    {has_document.then(|| icon("file-text"))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {has_calendar.then(|| icon("calendar"))}
                                                    <span>{date}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="dot" style:background-color=color></span>
                                                    <span style:color=color>{status_name}</span>
                                                    {icon("more-vertical")}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <div class="pagination">
                    <button class="pagination__btn" title="Previous page">{icon("arrow-left")}</button>
                    {PAGES
                        .iter()
                        .map(|page| view! {
                            <button
                                class="pagination__number"
                                class:pagination__number--active=*page == 1
                            >
                                {*page}
                            </button>
                        })
                        .collect_view()}
                    <button class="pagination__btn" title="Next page">{icon("arrow-right")}</button>
                </div>
            </div>

            {move || current_order.get().map(|order| view! {
                <OrderDetails order=order on_close=close_order />
            })}
        </PageFrame>
    }
}
