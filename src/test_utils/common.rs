use crate::{BackendSet, ServiceInstance};

static LOGGER_INIT: once_cell::sync::Lazy<()> = once_cell::sync::Lazy::new(|| {
    let _ = env_logger::builder().is_test(true).try_init();
});

pub fn enable_logger() {
    *LOGGER_INIT;
}

pub fn instance(
    address: &str,
    port: u16,
) -> ServiceInstance {
    ServiceInstance::new(address, port)
}

pub fn backend_set(pairs: &[(&str, u16)]) -> BackendSet {
    BackendSet::new(
        pairs
            .iter()
            .map(|(address, port)| ServiceInstance::new(*address, *port))
            .collect(),
    )
}
