pub mod alert_banner;
