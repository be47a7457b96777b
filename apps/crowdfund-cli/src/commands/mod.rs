pub mod create_campaign;
pub mod list_campaigns;
