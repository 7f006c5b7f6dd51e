mod config_flow;
mod dispatch;
