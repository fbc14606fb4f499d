pub mod booking;
pub mod catalog;

use stayfinder_kernel::ModuleRegistry;

/// Register all storefront modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(catalog::create_module());
    registry.register(booking::create_module());
}
