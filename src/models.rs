//! Frontend Models
//!
//! Data structures matching backend entities. Wire casing is camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Signed-in user (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub is_staff: bool,
}

/// Auth payload returned by login/register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub csrf_token: Option<String>,
    pub user: User,
}

/// Delivery cadence for subscription plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryFrequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl DeliveryFrequency {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryFrequency::Weekly => "Every week",
            DeliveryFrequency::Biweekly => "Every two weeks",
            DeliveryFrequency::Monthly => "Once a month",
        }
    }

    pub fn deliveries_per_year(&self) -> u32 {
        match self {
            DeliveryFrequency::Weekly => 52,
            DeliveryFrequency::Biweekly => 26,
            DeliveryFrequency::Monthly => 12,
        }
    }
}

/// Plan lifecycle status, driven entirely by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    PendingPayment,
    Active,
    Paused,
    Cancelled,
}

impl PlanStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PlanStatus::PendingPayment => "Awaiting payment",
            PlanStatus::Active => "Active",
            PlanStatus::Paused => "Paused",
            PlanStatus::Cancelled => "Cancelled",
        }
    }
}

/// Plan kind specific fields, discriminated by `planType`.
///
/// The backend sets the discriminant authoritatively; unknown values fail
/// deserialization instead of falling back to structural guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "planType", rename_all = "snake_case")]
pub enum PlanDetails {
    #[serde(rename_all = "camelCase")]
    Subscription { frequency: DeliveryFrequency },
    #[serde(rename_all = "camelCase")]
    Upfront { years: u32, deliveries_per_year: u32 },
    #[serde(rename_all = "camelCase")]
    SingleDelivery { delivery_date: NaiveDate },
}

impl PlanDetails {
    pub fn label(&self) -> &'static str {
        match self {
            PlanDetails::Subscription { .. } => "Subscription",
            PlanDetails::Upfront { .. } => "Upfront",
            PlanDetails::SingleDelivery { .. } => "Single delivery",
        }
    }
}

/// Plan data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: u32,
    pub status: PlanStatus,
    pub recipient_name: String,
    pub recipient_address: String,
    pub budget: f64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub referral_code: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub details: PlanDetails,
}

/// Payload for creating a plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlanRequest {
    pub recipient_name: String,
    pub recipient_address: String,
    pub budget: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(flatten)]
    pub details: PlanDetails,
}

/// Editable fields of an existing plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<DeliveryFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Delivery event status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Scheduled,
    Preparing,
    Delivered,
    Skipped,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Scheduled => "Scheduled",
            EventStatus::Preparing => "Preparing",
            EventStatus::Delivered => "Delivered",
            EventStatus::Skipped => "Skipped",
        }
    }
}

/// One scheduled delivery of a plan (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryEvent {
    pub id: u32,
    pub plan_id: u32,
    pub scheduled_for: NaiveDate,
    pub status: EventStatus,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Partner/affiliate record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: u32,
    pub name: String,
    pub referral_code: String,
    pub commission_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionStatus {
    Pending,
    Approved,
    Paid,
}

impl CommissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CommissionStatus::Pending => "Pending",
            CommissionStatus::Approved => "Approved",
            CommissionStatus::Paid => "Paid",
        }
    }
}

/// Commission earned by a partner for a referred plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub id: u32,
    pub partner_id: u32,
    pub plan_id: u32,
    pub amount: f64,
    pub status: CommissionStatus,
    pub earned_at: DateTime<Utc>,
}

// ========================
// Pricing
// ========================

/// Input tuple for the price calculation endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
    pub budget: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<DeliveryFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliveries_per_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
}

/// Priced result returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub amount: f64,
    #[serde(default)]
    pub breakdown: Option<Vec<BreakdownLine>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownLine {
    pub label: String,
    pub amount: f64,
}

/// Checkout session created by the backend payment integration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub checkout_url: String,
}

// ========================
// Plan wizard draft
// ========================

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    ChooseType,
    Recipient,
    Schedule,
    Review,
}

impl WizardStep {
    pub fn next(&self) -> WizardStep {
        match self {
            WizardStep::ChooseType => WizardStep::Recipient,
            WizardStep::Recipient => WizardStep::Schedule,
            WizardStep::Schedule => WizardStep::Review,
            WizardStep::Review => WizardStep::Review,
        }
    }

    pub fn prev(&self) -> WizardStep {
        match self {
            WizardStep::ChooseType => WizardStep::ChooseType,
            WizardStep::Recipient => WizardStep::ChooseType,
            WizardStep::Schedule => WizardStep::Recipient,
            WizardStep::Review => WizardStep::Schedule,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::ChooseType => "Plan type",
            WizardStep::Recipient => "Recipient",
            WizardStep::Schedule => "Budget & schedule",
            WizardStep::Review => "Review",
        }
    }
}

/// Plan kind chosen on the wizard's first step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Subscription,
    Upfront,
    SingleDelivery,
}

impl PlanKind {
    pub fn label(&self) -> &'static str {
        match self {
            PlanKind::Subscription => "Subscription",
            PlanKind::Upfront => "Upfront (multi-year)",
            PlanKind::SingleDelivery => "Single delivery",
        }
    }
}

/// Draft state of the plan wizard, persisted between page loads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardDraft {
    pub step: WizardStep,
    pub kind: Option<PlanKind>,
    pub recipient_name: String,
    pub recipient_address: String,
    pub budget: f64,
    pub frequency: DeliveryFrequency,
    pub years: u32,
    pub delivery_date: Option<NaiveDate>,
    pub note: String,
    pub referral_code: String,
}

impl Default for WizardDraft {
    fn default() -> Self {
        Self {
            step: WizardStep::ChooseType,
            kind: None,
            recipient_name: String::new(),
            recipient_address: String::new(),
            budget: 50.0,
            frequency: DeliveryFrequency::Monthly,
            years: 1,
            delivery_date: None,
            note: String::new(),
            referral_code: String::new(),
        }
    }
}

impl WizardDraft {
    /// Quote inputs for the draft's current configuration
    pub fn quote_params(&self) -> QuoteParams {
        match self.kind {
            Some(PlanKind::Upfront) => QuoteParams {
                budget: self.budget,
                frequency: None,
                deliveries_per_year: Some(self.frequency.deliveries_per_year()),
                years: Some(self.years),
            },
            Some(PlanKind::SingleDelivery) => QuoteParams {
                budget: self.budget,
                frequency: None,
                deliveries_per_year: None,
                years: None,
            },
            _ => QuoteParams {
                budget: self.budget,
                frequency: Some(self.frequency),
                deliveries_per_year: None,
                years: None,
            },
        }
    }

    /// Build the creation payload; None until required fields are filled in
    pub fn to_request(&self) -> Option<NewPlanRequest> {
        let kind = self.kind?;
        if self.recipient_name.trim().is_empty() || self.recipient_address.trim().is_empty() {
            return None;
        }
        let details = match kind {
            PlanKind::Subscription => PlanDetails::Subscription {
                frequency: self.frequency,
            },
            PlanKind::Upfront => PlanDetails::Upfront {
                years: self.years,
                deliveries_per_year: self.frequency.deliveries_per_year(),
            },
            PlanKind::SingleDelivery => PlanDetails::SingleDelivery {
                delivery_date: self.delivery_date?,
            },
        };
        Some(NewPlanRequest {
            recipient_name: self.recipient_name.trim().to_string(),
            recipient_address: self.recipient_address.trim().to_string(),
            budget: self.budget,
            note: (!self.note.trim().is_empty()).then(|| self.note.trim().to_string()),
            referral_code: (!self.referral_code.trim().is_empty())
                .then(|| self.referral_code.trim().to_string()),
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_type_discriminant_selects_variant() {
        let subscription: PlanDetails =
            serde_json::from_str(r#"{"planType":"subscription","frequency":"biweekly"}"#)
                .expect("subscription should decode");
        assert_eq!(
            subscription,
            PlanDetails::Subscription {
                frequency: DeliveryFrequency::Biweekly
            }
        );

        let upfront: PlanDetails =
            serde_json::from_str(r#"{"planType":"upfront","years":2,"deliveriesPerYear":12}"#)
                .expect("upfront should decode");
        assert_eq!(
            upfront,
            PlanDetails::Upfront {
                years: 2,
                deliveries_per_year: 12
            }
        );

        let single: PlanDetails =
            serde_json::from_str(r#"{"planType":"single_delivery","deliveryDate":"2026-09-01"}"#)
                .expect("single delivery should decode");
        assert!(matches!(single, PlanDetails::SingleDelivery { .. }));
    }

    #[test]
    fn unknown_plan_type_is_rejected() {
        let result: Result<PlanDetails, _> =
            serde_json::from_str(r#"{"planType":"mystery_bouquet","frequency":"weekly"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn plan_decodes_with_flattened_details() {
        let plan: Plan = serde_json::from_str(
            r#"{
                "id": 7,
                "status": "active",
                "recipientName": "Mara",
                "recipientAddress": "12 Tulip Lane",
                "budget": 75.0,
                "createdAt": "2026-08-01T09:00:00Z",
                "planType": "subscription",
                "frequency": "monthly"
            }"#,
        )
        .expect("plan should decode");
        assert_eq!(plan.status, PlanStatus::Active);
        assert_eq!(
            plan.details,
            PlanDetails::Subscription {
                frequency: DeliveryFrequency::Monthly
            }
        );
    }

    #[test]
    fn quote_params_omit_unset_fields() {
        let json = serde_json::to_string(&QuoteParams {
            budget: 75.0,
            frequency: Some(DeliveryFrequency::Weekly),
            deliveries_per_year: None,
            years: None,
        })
        .expect("params should encode");
        assert_eq!(json, r#"{"budget":75.0,"frequency":"weekly"}"#);
    }

    #[test]
    fn wizard_steps_walk_forward_and_back() {
        let mut step = WizardStep::ChooseType;
        step = step.next();
        step = step.next();
        assert_eq!(step, WizardStep::Schedule);
        assert_eq!(step.prev(), WizardStep::Recipient);
        // Ends are clamped
        assert_eq!(WizardStep::Review.next(), WizardStep::Review);
        assert_eq!(WizardStep::ChooseType.prev(), WizardStep::ChooseType);
    }

    #[test]
    fn draft_requires_recipient_before_building_request() {
        let mut draft = WizardDraft {
            kind: Some(PlanKind::Subscription),
            ..WizardDraft::default()
        };
        assert!(draft.to_request().is_none());

        draft.recipient_name = "Mara".into();
        draft.recipient_address = "12 Tulip Lane".into();
        let request = draft.to_request().expect("complete draft should build");
        assert_eq!(
            request.details,
            PlanDetails::Subscription {
                frequency: DeliveryFrequency::Monthly
            }
        );
    }

    #[test]
    fn single_delivery_draft_requires_date() {
        let draft = WizardDraft {
            kind: Some(PlanKind::SingleDelivery),
            recipient_name: "Mara".into(),
            recipient_address: "12 Tulip Lane".into(),
            delivery_date: None,
            ..WizardDraft::default()
        };
        assert!(draft.to_request().is_none());
    }

    #[test]
    fn upfront_draft_quotes_with_yearly_cadence() {
        let draft = WizardDraft {
            kind: Some(PlanKind::Upfront),
            years: 3,
            frequency: DeliveryFrequency::Biweekly,
            ..WizardDraft::default()
        };
        let params = draft.quote_params();
        assert_eq!(params.years, Some(3));
        assert_eq!(params.deliveries_per_year, Some(26));
        assert_eq!(params.frequency, None);
    }
}
