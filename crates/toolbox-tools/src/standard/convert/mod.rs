//! # Converters
//!
//! Number bases, temperatures, measurement units, timestamps, number words,
//! color notation and image data URIs.

pub mod color;
pub mod epoch;
pub mod image;
pub mod radix;
pub mod temperature;
pub mod units;
pub mod words;

pub use color::{HexToRgbTool, Rgb, RgbToHexTool, parse_hex};
pub use epoch::{EpochConverterTool, EpochUnit, parse_epoch};
pub use image::{
    Base64ToImageTool, DecodedImage, ImageToBase64Tool, decode_image_data_uri, image_to_data_uri,
};
pub use radix::{
    BinaryToDecimalTool, DecimalToBinaryTool, MAX_SAFE_INTEGER, binary_to_decimal,
    decimal_to_binary,
};
pub use temperature::{
    TemperatureConverterTool, TemperatureUnit, Temperatures, convert_temperature,
};
pub use units::{MEASURE_UNITS, TIME_UNITS, TimeConverterTool, UnitConverterTool, convert_units};
pub use words::{NumberToWordsTool, WordsToNumberTool, number_to_words, words_to_number};
