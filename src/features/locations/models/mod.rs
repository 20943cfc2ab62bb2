mod county;
mod dataset;
mod district;
mod level;
mod parish;
mod sub_county;
mod village;

pub use county::County;
pub use dataset::Dataset;
pub use district::District;
pub use level::Level;
pub use parish::Parish;
pub use sub_county::SubCounty;
pub use village::Village;

/// Common view over the five hierarchy entity types
pub trait Entity {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    /// Identifier of the entity one level up, `None` for districts
    fn parent_id(&self) -> Option<&str>;
}
