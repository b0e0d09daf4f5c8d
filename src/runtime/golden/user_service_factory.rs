// Generated code from Meshestra. Do not modify!

/// Factory of `meshestra_codegen::runtime::golden::service::UserService`.
#[allow(non_camel_case_types)]
pub struct UserService__Factory;
impl crate::runtime::Factory<crate::runtime::golden::service::UserService>
for UserService__Factory {
    fn create_instance(
        &self,
        injector: &dyn crate::runtime::Injector,
    ) -> crate::runtime::golden::service::UserService {
        let param1 = injector.get_instance::<crate::runtime::golden::service::Repo>();
        let param2 = injector.get_instance::<String>();
        let mut user_service = crate::runtime::golden::service::UserService::new(
            param1,
            param2,
        );
        injector.inject(&mut user_service);
        user_service
    }
    fn has_singleton_annotation(&self) -> bool {
        true
    }
    fn has_produces_singleton_annotation(&self) -> bool {
        false
    }
}
