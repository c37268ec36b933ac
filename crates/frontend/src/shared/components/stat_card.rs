use crate::shared::icons::icon;
use contracts::dashboards::d001_ecommerce::{ChangeDirection, StatCardData};
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Title, formatted value and change of one headline number
    card: StatCardData,
) -> impl IntoView {
    let (arrow, change_class) = match card.direction {
        ChangeDirection::Positive => ("arrow-up-right", "stat-card__change stat-card__change--up"),
        ChangeDirection::Negative => ("arrow-down-right", "stat-card__change stat-card__change--down"),
    };
    let card_class = match card.direction {
        ChangeDirection::Positive => "stat-card stat-card--success",
        ChangeDirection::Negative => "stat-card stat-card--error",
    };

    view! {
        <div class=card_class>
            <div class="stat-card__header">
                <div class="stat-card__icon">
                    {icon(card.icon)}
                </div>
                <span class=change_class>
                    {icon(arrow)}
                    <span>{card.change}</span>
                </span>
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{card.value}</div>
                <div class="stat-card__label">{card.title}</div>
            </div>
        </div>
    }
}
