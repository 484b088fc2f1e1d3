//! Plan Wizard Page
//!
//! Multi-step plan builder. The draft survives page reloads through the
//! draft store and is cleared once checkout starts.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiClient};
use crate::components::{BudgetSlider, FrequencyPicker, PriceSummary};
use crate::context::AppContext;
use crate::draft::{DraftStore, LocalStorageDrafts, PLAN_DRAFT_KEY};
use crate::models::{PlanKind, WizardDraft, WizardStep};
use crate::recalc::use_price_recalc;

const STEPS: &[WizardStep] = &[
    WizardStep::ChooseType,
    WizardStep::Recipient,
    WizardStep::Schedule,
    WizardStep::Review,
];

const KINDS: &[PlanKind] = &[
    PlanKind::Subscription,
    PlanKind::Upfront,
    PlanKind::SingleDelivery,
];

#[component]
pub fn PlanWizardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let navigate = use_navigate();

    // Resume a draft left by a previous visit, if any
    let (draft, set_draft) = signal(
        LocalStorageDrafts
            .load::<WizardDraft>(PLAN_DRAFT_KEY)
            .unwrap_or_default(),
    );
    let (submitting, set_submitting) = signal(false);

    let recalc = use_price_recalc(api);

    let save_draft = move || {
        draft.with_untracked(|current| {
            LocalStorageDrafts.save(PLAN_DRAFT_KEY, current);
        });
    };

    // Re-quote on any draft change once pricing inputs are on screen; the
    // debouncer coalesces keystroke bursts into one request
    Effect::new(move |_| {
        let current = draft.get();
        if matches!(current.step, WizardStep::Schedule | WizardStep::Review) {
            recalc.schedule(current.quote_params());
        }
    });

    let go_next = move |_| {
        set_draft.update(|d| d.step = d.step.next());
        save_draft();
    };
    let go_back = move |_| {
        set_draft.update(|d| d.step = d.step.prev());
        save_draft();
    };

    let recipient_incomplete = move || {
        draft.with(|d| {
            d.recipient_name.trim().is_empty() || d.recipient_address.trim().is_empty()
        })
    };
    let schedule_incomplete = move || {
        draft.with(|d| {
            matches!(d.kind, Some(PlanKind::SingleDelivery)) && d.delivery_date.is_none()
        })
    };

    let on_submit = move |_| {
        let Some(request) = draft.get_untracked().to_request() else {
            ctx.notify_error("Please complete the plan details first");
            return;
        };
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_plan(&api, &request).await {
                Ok(plan) => match api::create_checkout(&api, plan.id).await {
                    Ok(session) => {
                        LocalStorageDrafts.clear(PLAN_DRAFT_KEY);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&session.checkout_url);
                        }
                    }
                    Err(e) => {
                        // The plan exists but is unpaid; its detail page
                        // offers checkout again
                        LocalStorageDrafts.clear(PLAN_DRAFT_KEY);
                        ctx.notify_error(e.to_string());
                        navigate(&format!("/plans/{}", plan.id), Default::default());
                    }
                },
                Err(e) => {
                    set_submitting.set(false);
                    ctx.notify_error(e.to_string());
                }
            }
        });
    };

    let on_budget = Callback::new(move |value: f64| {
        set_draft.update(|d| d.budget = value);
        save_draft();
    });
    let on_frequency = Callback::new(move |value| {
        set_draft.update(|d| d.frequency = value);
        save_draft();
    });

    view! {
        <div class="plan-wizard">
            <h1>"Build your plan"</h1>

            <div class="wizard-steps">
                {STEPS.iter().map(|step| {
                    let step = *step;
                    view! {
                        <span class=move || {
                            if draft.with(|d| d.step) == step {
                                "wizard-step active"
                            } else {
                                "wizard-step"
                            }
                        }>
                            {step.title()}
                        </span>
                    }
                }).collect_view()}
            </div>

            {move || match draft.with(|d| d.step) {
                WizardStep::ChooseType => view_choose_type(set_draft, save_draft).into_any(),
                WizardStep::Recipient => view! {
                    <div class="wizard-body">
                        <input
                            type="text"
                            placeholder="Recipient name"
                            prop:value=move || draft.with(|d| d.recipient_name.clone())
                            on:input=move |ev| {
                                set_draft.update(|d| d.recipient_name = event_target_value(&ev));
                                save_draft();
                            }
                        />
                        <input
                            type="text"
                            placeholder="Delivery address"
                            prop:value=move || draft.with(|d| d.recipient_address.clone())
                            on:input=move |ev| {
                                set_draft.update(|d| d.recipient_address = event_target_value(&ev));
                                save_draft();
                            }
                        />
                        <textarea
                            placeholder="Card message (optional)"
                            prop:value=move || draft.with(|d| d.note.clone())
                            on:input=move |ev| {
                                set_draft.update(|d| d.note = event_target_value(&ev));
                                save_draft();
                            }
                        ></textarea>
                        <div class="wizard-nav">
                            <button on:click=go_back>"Back"</button>
                            <button
                                class="btn btn-primary"
                                disabled=recipient_incomplete
                                on:click=go_next
                            >
                                "Next"
                            </button>
                        </div>
                    </div>
                }
                .into_any(),
                WizardStep::Schedule => view! {
                    <div class="wizard-body">
                        <BudgetSlider
                            value=Signal::derive(move || draft.with(|d| d.budget))
                            on_change=on_budget
                        />
                        {move || draft.with(|d| d.kind != Some(PlanKind::SingleDelivery)).then(|| view! {
                            <FrequencyPicker
                                value=Signal::derive(move || draft.with(|d| d.frequency))
                                on_change=on_frequency
                            />
                        })}
                        {move || draft.with(|d| d.kind == Some(PlanKind::Upfront)).then(|| view! {
                            <label class="years-field">
                                "Years"
                                <input
                                    type="number"
                                    min="1"
                                    max="5"
                                    prop:value=move || draft.with(|d| d.years.to_string())
                                    on:input=move |ev| {
                                        if let Ok(years) = event_target_value(&ev).parse::<u32>() {
                                            set_draft.update(|d| d.years = years);
                                            save_draft();
                                        }
                                    }
                                />
                            </label>
                        })}
                        {move || draft.with(|d| d.kind == Some(PlanKind::SingleDelivery)).then(|| view! {
                            <label class="date-field">
                                "Delivery date"
                                <input
                                    type="date"
                                    prop:value=move || draft.with(|d| {
                                        d.delivery_date.map(|date| date.to_string()).unwrap_or_default()
                                    })
                                    on:input=move |ev| {
                                        let parsed = NaiveDate::parse_from_str(
                                            &event_target_value(&ev),
                                            "%Y-%m-%d",
                                        )
                                        .ok();
                                        set_draft.update(|d| d.delivery_date = parsed);
                                        save_draft();
                                    }
                                />
                            </label>
                        })}
                        <PriceSummary recalc=recalc />
                        <div class="wizard-nav">
                            <button on:click=go_back>"Back"</button>
                            <button
                                class="btn btn-primary"
                                disabled=schedule_incomplete
                                on:click=go_next
                            >
                                "Next"
                            </button>
                        </div>
                    </div>
                }
                .into_any(),
                WizardStep::Review => view! {
                    <div class="wizard-body">
                        <ul class="review-summary">
                            <li>{move || draft.with(|d| {
                                d.kind.map(|kind| kind.label()).unwrap_or("No plan type chosen")
                            })}</li>
                            <li>{move || draft.with(|d| format!(
                                "For {} at {}",
                                d.recipient_name, d.recipient_address
                            ))}</li>
                            <li>{move || draft.with(|d| format!("€{:.0} per delivery", d.budget))}</li>
                        </ul>
                        <PriceSummary recalc=recalc />
                        <input
                            type="text"
                            placeholder="Partner referral code (optional)"
                            prop:value=move || draft.with(|d| d.referral_code.clone())
                            on:input=move |ev| {
                                set_draft.update(|d| d.referral_code = event_target_value(&ev));
                                save_draft();
                            }
                        />
                        <div class="wizard-nav">
                            <button on:click=go_back>"Back"</button>
                            <button
                                class="btn btn-primary"
                                disabled=move || submitting.get()
                                on:click=on_submit.clone()
                            >
                                "Continue to payment"
                            </button>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

fn view_choose_type(
    set_draft: WriteSignal<WizardDraft>,
    save_draft: impl Fn() + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="wizard-body plan-kind-choices">
            {KINDS.iter().map(|kind| {
                let kind = *kind;
                view! {
                    <button
                        class="plan-kind-btn"
                        on:click=move |_| {
                            set_draft.update(|d| {
                                d.kind = Some(kind);
                                d.step = d.step.next();
                            });
                            save_draft();
                        }
                    >
                        {kind.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
