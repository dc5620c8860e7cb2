mod manifest_prober;

pub use manifest_prober::ManifestProber;
