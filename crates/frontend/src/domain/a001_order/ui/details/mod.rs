//! Order detail overlay.

use crate::shared::modal::Modal;
use contracts::domain::a001_order::OrderRecord;
use leptos::prelude::*;

#[component]
fn DetailItem(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="detail-grid__item">
            <span class="detail-grid__label">{label}</span>
            <span class="detail-grid__value">{children()}</span>
        </div>
    }
}

#[component]
pub fn OrderDetails(order: OrderRecord, on_close: Callback<()>) -> impl IntoView {
    let status_color = order.status.color();
    let status_name = order.status.display_name();
    let title = format!("Order Details - {}", order.id);

    view! {
        <Modal title=title on_close=on_close>
            <section class="detail-section">
                <h3 class="detail-section__title">"Order Information"</h3>
                <div class="detail-grid">
                    <DetailItem label="Order ID:">{order.id}</DetailItem>
                    <DetailItem label="User:">{order.user}</DetailItem>
                    <DetailItem label="Project:">{order.project}</DetailItem>
                    <DetailItem label="Address:">{order.address}</DetailItem>
                    <DetailItem label="Date:">{order.date}</DetailItem>
                    <DetailItem label="Status:">
                        <span style:color=status_color>{status_name}</span>
                    </DetailItem>
                </div>
            </section>
        </Modal>
    }
}
