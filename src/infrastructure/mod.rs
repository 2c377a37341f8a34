pub mod tags;

pub use tags::InMemoryTagService;
