pub mod dashboard;
pub mod filter_bar;
pub mod leads_table;
pub mod login;
pub mod pagination;
pub mod stat_cards;
pub mod upload;
