//! Output stage: the published JSON catalog, card images and the banned
//! effects list.

pub mod error;
pub mod images;
pub mod json;
pub mod record;
pub mod regulation;

pub use error::ExportError;
pub use images::{ImageJob, ImageOutcome, ImagePlan, ImageReport, export_images, plan_images};
pub use json::{CatalogFiles, read_sets, to_json_compact, to_json_pretty, write_catalog};
pub use record::{CardRecord, CollectionRecord, SetRecord, catalog_records};
pub use regulation::{
    BannedCard, Regulation, default_banned, derive_banned, load_banned, write_regulation,
};
