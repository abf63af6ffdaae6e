//! Shared plumbing for the folio CLI tools: the JSON document snapshot the
//! bins load, mutate through the pipelines, and write back.

pub mod snapshot;
