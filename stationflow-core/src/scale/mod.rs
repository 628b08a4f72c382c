//! numeric mappings from station traffic to marker appearance.
mod flow_bucket;
mod radius_range;
mod radius_scale;

pub use flow_bucket::FlowBucket;
pub use radius_range::RadiusRange;
pub use radius_scale::RadiusScale;
