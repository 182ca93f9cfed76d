mod csv_io;
mod geojson_io;

pub use csv_io::{read_translations, read_translations_from_bytes};
pub use geojson_io::{read_document, read_geojson, read_geojson_from_bytes, write_geojson};
