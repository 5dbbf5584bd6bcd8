mod data_url_encoder;

pub use data_url_encoder::DataUrlFileEncoder;
