//! Types registered from `tyname.toml` by the build script.

pub mod model {
    pub struct Widget;
    pub struct Gadget;
}

tyname::include_type_names!();

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{model, type_hashes};
    use tyname::{Const, fnv1a_64, hash_of, name_of, type_hash, type_name};

    #[test]
    fn generated_registrations_apply() {
        assert_eq!(type_name::<model::Widget>(), "Widget");
        assert_eq!(type_name::<Const<model::Gadget>>(), "const model.Gadget");
        assert_eq!(name_of::<model::Gadget>(), "model.Gadget");
    }

    #[test]
    fn generated_constants_match_type_hashes() {
        assert_eq!(type_hashes::WIDGET, type_hash::<model::Widget>());
        assert_eq!(type_hashes::MODEL_GADGET, hash_of::<model::Gadget>());
        assert_eq!(type_hashes::WIDGET, fnv1a_64(b"Widget"));
    }
}
