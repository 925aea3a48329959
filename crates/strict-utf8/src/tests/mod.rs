
mod codepoints;
mod property_roundtrip;
