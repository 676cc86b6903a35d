mod label_policy;

pub use label_policy::LabelPolicy;
