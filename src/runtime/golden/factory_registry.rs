// Generated code from Meshestra. Do not modify!

/// factory registry of `meshestra_codegen::runtime::golden::FactoryRegistry`.
pub struct FactoryRegistry {
    children: crate::runtime::ChildRegistries<dyn crate::runtime::FactoryRegistry>,
}
impl FactoryRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            children: crate::runtime::ChildRegistries::new(),
        };
        registry
            .children
            .add_child_registry(
                Box::new(crate::runtime::golden::admin::FactoryRegistry::new()),
            );
        registry
    }
}
impl Default for FactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
impl crate::runtime::FactoryRegistry for FactoryRegistry {
    fn get_factory_for(&self, type_name: &str) -> Option<crate::runtime::ErasedFactory> {
        match type_name {
            "meshestra_codegen::runtime::golden::service::UserService" => {
                Some(
                    crate::runtime::erase_factory::<
                        crate::runtime::golden::service::UserService,
                        _,
                    >(crate::runtime::golden::service::UserService__Factory),
                )
            }
            _ => self.children.get_factory_in_children(type_name),
        }
    }
}
