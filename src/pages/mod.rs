//! Pages
//!
//! Routed page components: the customer storefront and the admin back
//! office.

mod account;
mod admin;
mod checkout_return;
mod home;
mod login;
mod partner;
mod plan_detail;
mod plan_wizard;
mod plans;

pub use account::AccountPage;
pub use admin::{AdminDashboardPage, AdminEventsPage, AdminPartnersPage};
pub use checkout_return::CheckoutReturnPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use partner::PartnerPage;
pub use plan_detail::PlanDetailPage;
pub use plan_wizard::PlanWizardPage;
pub use plans::PlansPage;
