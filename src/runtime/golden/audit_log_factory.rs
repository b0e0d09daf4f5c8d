// Generated code from Meshestra. Do not modify!

/// Factory of `meshestra_codegen::runtime::golden::admin::AuditLog`.
#[allow(non_camel_case_types)]
pub struct AuditLog__Factory;
impl crate::runtime::Factory<crate::runtime::golden::admin::AuditLog>
for AuditLog__Factory {
    #[allow(unused_variables)]
    fn create_instance(
        &self,
        injector: &dyn crate::runtime::Injector,
    ) -> crate::runtime::golden::admin::AuditLog {
        let audit_log = crate::runtime::golden::admin::AuditLog::new();
        audit_log
    }
    fn has_singleton_annotation(&self) -> bool {
        false
    }
    fn has_produces_singleton_annotation(&self) -> bool {
        true
    }
}
