pub mod segment;

pub use segment::{MemorySegment, MemorySegmentBuilder, SegmentMetadata};
