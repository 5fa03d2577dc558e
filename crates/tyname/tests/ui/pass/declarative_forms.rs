use tyname::prelude::*;

struct Mesh;
struct Texture;

mod audio {
    pub struct Clip;
}

tyname::type_name!(Mesh, Texture);
tyname::type_name!(audio::Clip => "Clip";);

fn main() {
    assert_eq!(type_name::<Mesh>(), "Mesh");
    assert_eq!(type_name::<Const<Texture>>(), "const Texture");
    assert_eq!(name_of::<audio::Clip>(), "Clip");
    assert_eq!(hash_of::<Const<audio::Clip>>(), type_hash::<Const<audio::Clip>>());
}
