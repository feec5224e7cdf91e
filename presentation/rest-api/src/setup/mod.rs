pub mod dependency_injection;
pub mod server;
#[cfg(test)]
pub mod test_support;
