pub mod land_converter;
