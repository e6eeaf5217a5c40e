//! Message digests rendered as lowercase hex.

use md5::Md5;
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use toolbox_core::{ExecutionResult, Tool};

use crate::core::ToolConfig;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HashInput {
    pub text: String,
}

impl ToolConfig for HashInput {
    const RAW_JSON_INPUT: bool = true;

    fn from_simple(input: String) -> Option<Self> {
        Some(Self { text: input })
    }
}

fn hex_digest<D: Digest>(text: &str) -> String {
    hex::encode(D::digest(text.as_bytes()))
}

pub fn md5_hex(text: &str) -> String {
    hex_digest::<Md5>(text)
}

pub fn sha1_hex(text: &str) -> String {
    hex_digest::<Sha1>(text)
}

pub fn sha256_hex(text: &str) -> String {
    hex_digest::<Sha256>(text)
}

/// MD5 together with the SHA-1 digest earlier versions showed under this
/// name.
#[derive(Debug, Default, Clone, Copy)]
pub struct Md5HashTool;

impl Tool for Md5HashTool {
    fn name(&self) -> &str {
        "md5-hash-generator"
    }

    fn call(&self, input: String) -> ExecutionResult {
        HashInput::parse(input)
            .map(|config| {
                serde_json::json!({
                    "md5": md5_hex(&config.text),
                    "sha1": sha1_hex(&config.text),
                })
            })
            .into()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256HashTool;

impl Tool for Sha256HashTool {
    fn name(&self) -> &str {
        "sha256-hash-generator"
    }

    fn call(&self, input: String) -> ExecutionResult {
        HashInput::parse(input)
            .map(|config| serde_json::json!({ "sha256": sha256_hex(&config.text) }))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "d41d8cd98f00b204e9800998ecf8427e")]
    #[case("abc", "900150983cd24fb0d6963f7d28e17f72")]
    #[case("The quick brown fox jumps over the lazy dog", "9e107d9d372bb6826bd81d3542a419d6")]
    fn md5_vectors(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(md5_hex(input), expected);
    }

    #[test]
    fn sha_vectors() {
        assert_eq!(sha1_hex("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn tools_report_digests() {
        let out = Md5HashTool.call("abc".into()).output_json().unwrap();
        assert_eq!(out["md5"], "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(out["sha1"], "a9993e364706816aba3e25717850c26c9cd0d89d");
        let out = Sha256HashTool.call("abc".into()).output_json().unwrap();
        assert_eq!(out["sha256"].as_str().unwrap().len(), 64);
    }

    #[rstest]
    #[case(r#"{"user":"ada","id":1}"#)]
    #[case(r#"{"text":"abc","extra":true}"#)]
    #[case("{not json")]
    fn json_like_text_is_hashed_verbatim(#[case] input: &str) {
        let out = Sha256HashTool.call(input.into()).output_json().unwrap();
        assert_eq!(out["sha256"], sha256_hex(input));
        let out = Md5HashTool.call(input.into()).output_json().unwrap();
        assert_eq!(out["md5"], md5_hex(input));
    }
}
