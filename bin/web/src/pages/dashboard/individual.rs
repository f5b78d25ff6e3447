//! Dashboard for individual and household accounts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::guard::RequireRole;
use crate::session::use_session;
use ecocycle_access::Role;
use ecocycle_client::{
    ApiClient, Challenge, IndividualDashboard, ItemCategory, MarketplaceFilter, MarketplaceItem,
    NewMarketplaceItem, Pickup, RecyclingEntry, Reward,
};

/// User dashboard route, admitting individual and household accounts.
#[component]
pub fn UserDashboardPage() -> impl IntoView {
    view! {
        <RequireRole allowed=vec![Role::Individual, Role::Household]>
            <UserDashboardContent/>
        </RequireRole>
    }
}

/// Dashboard content, rendered once the guard grants access.
#[component]
fn UserDashboardContent() -> impl IntoView {
    let session = use_session();

    let (dashboard, set_dashboard) = signal(Option::<IndividualDashboard>::None);
    let (dashboard_error, set_dashboard_error) = signal(Option::<String>::None);

    if let Some(credential) = session.credential() {
        spawn_local(async move {
            let client = ApiClient::new(AppConfig::from_build_env().api_base);
            match client.individual_dashboard(&credential).await {
                Ok(summary) => set_dashboard.set(Some(summary)),
                Err(e) => {
                    warn!(error = %e, "failed to load dashboard");
                    set_dashboard_error.set(Some(e.user_message()));
                }
            }
        });
    }

    view! {
        <div class="user-dashboard">
            {move || session.principal().map(|principal| view! {
                <h1>{format!("Welcome back, {}!", principal.first_name())}</h1>
            })}
            {move || match (dashboard.get(), dashboard_error.get()) {
                (_, Some(message)) => view! {
                    <p class="error">{message}</p>
                }.into_any(),
                (None, None) => view! {
                    <p>"Loading your dashboard..."</p>
                }.into_any(),
                (Some(summary), None) => view! {
                    <div class="dashboard-summary">
                        <section class="stats-row">
                            <div class="stat-card">
                                <span class="stat-value">{format!("{} kg", summary.total_recycled_kg)}</span>
                                <span class="stat-label">"Total recycled"</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-value">{format!("{} kg", summary.co2_saved_total)}</span>
                                <span class="stat-label">"CO2 saved"</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-value">{summary.challenges_completed_count}</span>
                                <span class="stat-label">"Challenges completed"</span>
                            </div>
                        </section>
                        <PickupList pickups=summary.upcoming_pickups/>
                        <ChallengeList challenges=summary.active_challenges/>
                        <RewardList rewards=summary.rewards/>
                        <RecyclingHistory entries=summary.recycling_history/>
                    </div>
                }.into_any(),
            }}
            <MarketplaceSection/>
            <button class="logout-button" on:click=move |_| session.logout()>"Log out"</button>
        </div>
    }
}

/// Upcoming pickups section.
#[component]
fn PickupList(pickups: Vec<Pickup>) -> impl IntoView {
    view! {
        <section class="pickups">
            <h2>"Upcoming Pickups"</h2>
            {if pickups.is_empty() {
                view! { <p class="empty-state">"No pickups scheduled."</p> }.into_any()
            } else {
                view! {
                    <ul class="pickup-list">
                        {pickups.into_iter().map(|pickup| {
                            let materials = materials_summary(&pickup.materials);
                            view! {
                                <li class="pickup">
                                    <span class="pickup-date">
                                        {pickup.date.format("%B %e, %Y").to_string()}
                                    </span>
                                    <span class="pickup-address">{pickup.address}</span>
                                    <span class="pickup-status">{pickup.status.label()}</span>
                                    {materials.map(|summary| view! {
                                        <span class="pickup-materials">{summary}</span>
                                    })}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </section>
    }
}

/// Active challenges with progress bars.
#[component]
fn ChallengeList(challenges: Vec<Challenge>) -> impl IntoView {
    view! {
        <section class="challenges">
            <h2>"Active Challenges"</h2>
            {if challenges.is_empty() {
                view! { <p class="empty-state">"No active challenges."</p> }.into_any()
            } else {
                view! {
                    <ul class="challenge-list">
                        {challenges.into_iter().map(|challenge| {
                            let percent = challenge.percent_complete();
                            view! {
                                <li class="challenge">
                                    <span class="challenge-title">{challenge.title}</span>
                                    <span class="challenge-progress">
                                        {format!("{}/{}", challenge.progress, challenge.target)}
                                    </span>
                                    <div class="progress-bar">
                                        <div class="progress-fill" style:width=format!("{percent}%")></div>
                                    </div>
                                    <span class="challenge-points">
                                        {format!("{} pts", challenge.points_reward)}
                                    </span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </section>
    }
}

/// Claimable and claimed rewards.
#[component]
fn RewardList(rewards: Vec<Reward>) -> impl IntoView {
    view! {
        <section class="rewards">
            <h2>"Rewards"</h2>
            {if rewards.is_empty() {
                view! { <p class="empty-state">"No rewards yet. Keep recycling!"</p> }.into_any()
            } else {
                view! {
                    <ul class="reward-list">
                        {rewards.into_iter().map(|reward| view! {
                            <li class="reward">
                                <span class="reward-name">{reward.name}</span>
                                <span class="reward-points">{format!("{} pts", reward.points_required)}</span>
                                <span class="reward-status">
                                    {if reward.is_claimed { "Claimed" } else { "Available" }}
                                </span>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </section>
    }
}

/// Recent recycling history table.
#[component]
fn RecyclingHistory(entries: Vec<RecyclingEntry>) -> impl IntoView {
    view! {
        <section class="recycling-history">
            <h2>"Recycling History"</h2>
            {if entries.is_empty() {
                view! { <p class="empty-state">"Nothing recycled yet."</p> }.into_any()
            } else {
                view! {
                    <table class="history-table">
                        <thead>
                            <tr>
                                <th>"Material"</th>
                                <th>"Weight"</th>
                                <th>"CO2 saved"</th>
                                <th>"Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {entries.into_iter().map(|entry| view! {
                                <tr>
                                    <td>{entry.material_type}</td>
                                    <td>{format!("{} kg", entry.weight_kg)}</td>
                                    <td>{format!("{} kg", entry.co2_saved_kg)}</td>
                                    <td>{entry.date.format("%B %e, %Y").to_string()}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </section>
    }
}

/// Marketplace listing with category/search filters and a listing form.
#[component]
fn MarketplaceSection() -> impl IntoView {
    let session = use_session();

    let (items, set_items) = signal(Vec::<MarketplaceItem>::new());
    let (items_loaded, set_items_loaded) = signal(false);
    let (items_error, set_items_error) = signal(Option::<String>::None);
    let (category, set_category) = signal(Option::<ItemCategory>::None);
    let (search, set_search) = signal(String::new());

    // All captures are Copy, so the loader can be reused by the initial
    // load, the filter button, and the listing form.
    let load_items = move || {
        let Some(credential) = session.credential() else {
            return;
        };
        let search_text = search.get();
        let filter = MarketplaceFilter {
            category: category.get(),
            search: (!search_text.is_empty()).then_some(search_text),
        };
        set_items_error.set(None);
        spawn_local(async move {
            let client = ApiClient::new(AppConfig::from_build_env().api_base);
            match client.marketplace_items(&credential, &filter).await {
                Ok(list) => {
                    set_items.set(list);
                    set_items_loaded.set(true);
                }
                Err(e) => {
                    warn!(error = %e, "failed to load marketplace items");
                    set_items_error.set(Some(e.user_message()));
                }
            }
        });
    };
    load_items();

    let (new_name, set_new_name) = signal(String::new());
    let (new_description, set_new_description) = signal(String::new());
    let (new_price, set_new_price) = signal(String::new());
    let (new_category, set_new_category) = signal(ItemCategory::Furniture);
    let (creating, set_creating) = signal(false);
    let (create_error, set_create_error) = signal(Option::<String>::None);

    let on_create = move |_| {
        let name = new_name.get();
        let description = new_description.get();
        let price = new_price.get();
        if name.is_empty() || description.is_empty() || price.is_empty() {
            set_create_error.set(Some("Name, description, and price are required.".to_string()));
            return;
        }
        let Some(credential) = session.credential() else {
            return;
        };
        let item = NewMarketplaceItem {
            name,
            description,
            price,
            category: new_category.get(),
        };
        set_creating.set(true);
        set_create_error.set(None);
        spawn_local(async move {
            let client = ApiClient::new(AppConfig::from_build_env().api_base);
            match client.create_marketplace_item(&credential, &item).await {
                Ok(created) => {
                    debug!(item_id = %created.id, "listed marketplace item");
                    set_new_name.set(String::new());
                    set_new_description.set(String::new());
                    set_new_price.set(String::new());
                    load_items();
                }
                Err(e) => {
                    warn!(error = %e, "failed to list marketplace item");
                    set_create_error.set(Some(e.user_message()));
                }
            }
            set_creating.set(false);
        });
    };

    view! {
        <section class="marketplace">
            <h2>"Marketplace"</h2>
            <div class="marketplace-filters">
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_category.set(
                        ItemCategory::ALL.into_iter().find(|c| c.as_str() == value),
                    );
                }>
                    <option value="">"All categories"</option>
                    {ItemCategory::ALL.into_iter().map(|option| view! {
                        <option value=option.as_str()>{option.label()}</option>
                    }).collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Search items"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <button on:click=move |_| load_items()>"Apply"</button>
            </div>

            {move || {
                if let Some(message) = items_error.get() {
                    return view! { <p class="error">{message}</p> }.into_any();
                }
                if !items_loaded.get() {
                    return view! { <p>"Loading items..."</p> }.into_any();
                }
                let list = items.get();
                if list.is_empty() {
                    view! { <p class="empty-state">"No items match."</p> }.into_any()
                } else {
                    view! {
                        <ul class="marketplace-items">
                            {list.into_iter().map(|item| view! {
                                <li class="marketplace-item">
                                    <span class="item-name">{item.name}</span>
                                    <span class="item-category">{item.category.label()}</span>
                                    <span class="item-price">{format!("${}", item.price)}</span>
                                    <span class="item-seller">{item.seller_name}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}

            <div class="create-listing">
                <h3>"List an item"</h3>
                <div class="create-form">
                    <input
                        type="text"
                        placeholder="Item name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Description"
                        prop:value=move || new_description.get()
                        on:input=move |ev| set_new_description.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Price"
                        prop:value=move || new_price.get()
                        on:input=move |ev| set_new_price.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if let Some(parsed) =
                            ItemCategory::ALL.into_iter().find(|c| c.as_str() == value)
                        {
                            set_new_category.set(parsed);
                        }
                    }>
                        {ItemCategory::ALL.into_iter().map(|option| {
                            let selected = option == ItemCategory::Furniture;
                            view! {
                                <option value=option.as_str() selected=selected>
                                    {option.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    {move || create_error.get().map(|message| view! {
                        <p class="error">{message}</p>
                    })}
                    <button on:click=on_create disabled=move || creating.get()>
                        {move || if creating.get() { "Listing..." } else { "List item" }}
                    </button>
                </div>
            </div>
        </section>
    }
}

/// Formats the scheduling form's material map for display.
fn materials_summary(materials: &Value) -> Option<String> {
    let entries = materials.as_object()?;
    if entries.is_empty() {
        return None;
    }
    let parts: Vec<String> = entries
        .iter()
        .map(|(material, quantity)| format!("{material}: {quantity}"))
        .collect();
    Some(parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn materials_summary_joins_entries() {
        let materials = json!({"paper": 2, "plastic": 1});
        assert_eq!(
            materials_summary(&materials),
            Some("paper: 2, plastic: 1".to_string())
        );
    }

    #[test]
    fn materials_summary_skips_empty_and_non_object_values() {
        assert_eq!(materials_summary(&json!({})), None);
        assert_eq!(materials_summary(&json!(null)), None);
        assert_eq!(materials_summary(&json!("loose text")), None);
    }
}
