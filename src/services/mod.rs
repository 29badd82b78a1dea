pub mod subscription_flow;
