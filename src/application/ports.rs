//! Outbound ports to external collaborators

use async_trait::async_trait;
use tracing::info;

use crate::domain::BookingResult;

/// Billing collaborator. The engine only reports elapsed minutes after a
/// ride ends; pricing and invoicing happen on the other side of this port.
#[async_trait]
pub trait BillingGateway: Send + Sync {
    async fn report_ride_minutes(&self, user_id: &str, minutes: i64) -> BookingResult<()>;
}

/// Gateway that only records the report in the log. Stands in wherever no
/// real billing integration is wired up.
pub struct LoggingBillingGateway;

#[async_trait]
impl BillingGateway for LoggingBillingGateway {
    async fn report_ride_minutes(&self, user_id: &str, minutes: i64) -> BookingResult<()> {
        info!(user_id, minutes, "ride minutes reported to billing");
        Ok(())
    }
}
