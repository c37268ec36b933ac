//! Right-hand panel of the home layout: notifications, activities, contacts.

use crate::shared::icons::icon;
use leptos::prelude::*;

struct FeedEntry {
    icon: &'static str,
    text: &'static str,
    time: &'static str,
}

const NOTIFICATIONS: &[FeedEntry] = &[
    FeedEntry { icon: "bug", text: "You have a bug that needs to be fixed.", time: "Just now" },
    FeedEntry { icon: "user", text: "New user registered", time: "59 minutes ago" },
    FeedEntry { icon: "bug", text: "You have a bug that needs to be fixed.", time: "12 hours ago" },
    FeedEntry { icon: "radio", text: "Andi Lane subscribed to you", time: "Today, 11:59 AM" },
];

const ACTIVITIES: &[FeedEntry] = &[
    FeedEntry { icon: "user", text: "You have a bug that needs to be fixed.", time: "Just now" },
    FeedEntry { icon: "user", text: "Released a new version", time: "59 minutes ago" },
    FeedEntry { icon: "user", text: "Submitted a bug", time: "12 hours ago" },
    FeedEntry { icon: "user", text: "Modified A data in Page X", time: "Today, 11:59 AM" },
    FeedEntry { icon: "user", text: "Deleted a page in Project X", time: "Feb 2, 2023" },
];

const CONTACTS: &[&str] = &[
    "Natali Craig",
    "Drew Cano",
    "Orlando Diggs",
    "Andi Lane",
    "Kate Morrison",
    "Koray Okumus",
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[component]
fn FeedSection(title: &'static str, entries: &'static [FeedEntry]) -> impl IntoView {
    view! {
        <section class="app-panel__section">
            <h3 class="app-panel__title">{title}</h3>
            {entries.iter().map(|entry| view! {
                <div class="app-panel__entry">
                    <span class="app-panel__entry-icon">{icon(entry.icon)}</span>
                    <div class="app-panel__entry-body">
                        <div class="app-panel__entry-text">{entry.text}</div>
                        <div class="app-panel__entry-time">{entry.time}</div>
                    </div>
                </div>
            }).collect_view()}
        </section>
    }
}

#[component]
pub fn NotificationPanel() -> impl IntoView {
    view! {
        <div class="app-panel__content">
            <FeedSection title="Notifications" entries=NOTIFICATIONS />
            <FeedSection title="Activities" entries=ACTIVITIES />

            <section class="app-panel__section">
                <h3 class="app-panel__title">"Contacts"</h3>
                {CONTACTS.iter().map(|name| view! {
                    <div class="app-panel__entry">
                        <span class="avatar avatar--small">{initials(name)}</span>
                        <span class="app-panel__entry-text">{*name}</span>
                    </div>
                }).collect_view()}
            </section>
        </div>
    }
}
