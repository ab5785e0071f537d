//! Struct `Sample` represents a single labeled instance;
//! a training set is a slice `&[Sample]`.

// Provides sample struct.
pub(crate) mod sample_struct;

// Provides functions that read a file or a data frame.
pub(crate) mod sample_reader;

// Provides synthetic training sets.
pub(crate) mod synthetic;


pub use sample_struct::{Sample, n_classes, class_count};
pub use sample_reader::{
    SampleReader,
    read_csv,
    read_svmlight,
    from_dataframe,
};
pub use synthetic::{SyntheticClusters, gaussian_blobs};
