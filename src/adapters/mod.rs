// Adapters layer: concrete implementations for external systems (config file, output sinks).

pub mod sink;

pub use sink::{sink_for, CsvSink, JsonSink, TextSink};
