/// A named, server-owned array of entities reachable at `{base}/{name}`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    Posts,
    Users,
}

impl Collection {
    pub fn path(&self) -> &str {
        self.as_ref()
    }
}
