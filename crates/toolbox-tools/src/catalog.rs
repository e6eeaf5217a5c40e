//! The standard catalog: every tool paired with its descriptor.
//!
//! Icons are lucide icon names. Registration order is the order tools are
//! listed in within their category.

use std::sync::Arc;
#[cfg(feature = "network")]
use std::time::Duration;

use toolbox_core::{Category, Tool, ToolDescriptor, ToolSlug};

use crate::registry::{InMemoryToolRegistry, RegistryError};
use crate::standard::*;

/// Runtime dependencies of the stateful and networked tools.
#[derive(Clone)]
pub struct StandardToolsConfig {
    /// Backend of the online notepad
    pub notepad_store: SharedStore,
    /// ipify endpoint for the IP address checker
    #[cfg(feature = "network")]
    pub ipify_url: String,
    /// RDAP base URL for the domain age checker
    #[cfg(feature = "network")]
    pub rdap_url: String,
    /// Per-request timeout of both network tools
    #[cfg(feature = "network")]
    pub network_timeout: Duration,
}

impl std::fmt::Debug for StandardToolsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("StandardToolsConfig");
        #[cfg(feature = "network")]
        s.field("ipify_url", &self.ipify_url)
            .field("rdap_url", &self.rdap_url)
            .field("network_timeout", &self.network_timeout);
        s.finish_non_exhaustive()
    }
}

impl Default for StandardToolsConfig {
    fn default() -> Self {
        Self {
            notepad_store: shared_store(toolbox_memory::InMemoryMemory::new()),
            #[cfg(feature = "network")]
            ipify_url: DEFAULT_IPIFY_URL.to_string(),
            #[cfg(feature = "network")]
            rdap_url: DEFAULT_RDAP_URL.to_string(),
            #[cfg(feature = "network")]
            network_timeout: DEFAULT_NETWORK_TIMEOUT,
        }
    }
}

fn describe(
    slug: &'static str,
    name: &'static str,
    category: Category,
    icon: &'static str,
    description: &'static str,
    long_description: &'static str,
    keywords: &'static [&'static str],
) -> ToolDescriptor {
    ToolDescriptor {
        slug: ToolSlug::new_unchecked(slug),
        name,
        description,
        long_description: Some(long_description),
        keywords,
        category,
        icon,
    }
}

/// A descriptor and the tool it describes.
pub type CatalogEntry = (ToolDescriptor, Arc<dyn Tool>);

/// Every standard tool with its descriptor, in catalog order.
pub fn standard_tools(config: StandardToolsConfig) -> Vec<CatalogEntry> {
    use Category::*;

    let mut tools: Vec<CatalogEntry> = vec![
        (
            describe(
                "word-counter",
                "Word Counter",
                TextUtilities,
                "SigmaSquare",
                "Count words, characters, sentences and paragraphs in your text.",
                "Easily count the number of words, characters (with/without spaces), sentences, and paragraphs in any text. Useful for writers, students, and content creators.",
                &["word count", "character count", "sentence count", "paragraph count", "text analysis"],
            ),
            Arc::new(WordCounterTool),
        ),
        (
            describe(
                "character-counter",
                "Character Counter",
                TextUtilities,
                "Type",
                "Count characters in text, with and without spaces.",
                "A simple tool to count the total characters in a piece of text, including an option to count characters excluding spaces.",
                &["character count", "text tool", "letter count", "string length"],
            ),
            Arc::new(CharacterCounterTool),
        ),
        (
            describe(
                "case-converter",
                "Case Converter",
                TextUtilities,
                "Text",
                "Convert text to UPPERCASE, lowercase, Title Case, or Sentence case.",
                "Easily change the capitalization of your text. Supports UPPERCASE, lowercase, Title Case (first letter of each word capitalized), and Sentence case (first letter of each sentence capitalized).",
                &["case converter", "text formatting", "uppercase", "lowercase", "title case", "sentence case"],
            ),
            Arc::new(CaseConverterTool),
        ),
        (
            describe(
                "lorem-ipsum-generator",
                "Lorem Ipsum Generator",
                Generators,
                "FileText",
                "Generate placeholder text (Lorem Ipsum) for your designs.",
                "Quickly generate Lorem Ipsum placeholder text. Specify the number of paragraphs, sentences, or words you need for your mockups and designs.",
                &["lorem ipsum", "dummy text", "placeholder text", "text generator"],
            ),
            Arc::new(LoremIpsumTool),
        ),
        (
            describe(
                "random-password-generator",
                "Random Password Generator",
                Generators,
                "Lock",
                "Create strong, secure, and random passwords.",
                "Generate highly secure random passwords with customizable length and character types (uppercase, lowercase, numbers, symbols). Enhance your online security.",
                &["password generator", "security", "random password", "strong password"],
            ),
            Arc::new(PasswordGeneratorTool),
        ),
        (
            describe(
                "qr-code-generator",
                "QR Code Generator",
                Generators,
                "QrCode",
                "Create QR codes with custom colors, size and error correction.",
                "Generate QR codes instantly for URLs, text, and more. Pick foreground and background colors, size, margin and error correction level, and get an SVG image.",
                &["qr code", "generator", "barcode", "custom qr", "qr styling"],
            ),
            Arc::new(QrCodeGeneratorTool),
        ),
        (
            describe(
                "color-picker",
                "Color Picker",
                DesignTools,
                "Palette",
                "Pick a color and get its HEX, RGB and HSL codes.",
                "Select a color and view its HEX, RGB, and HSL values side by side. Ideal for designers and developers.",
                &["color picker", "hex code", "rgb value", "hsl value", "design tool"],
            ),
            Arc::new(ColorPickerTool),
        ),
        (
            describe(
                "rgb-to-hex-converter",
                "RGB to HEX Converter",
                Converters,
                "Pipette",
                "Convert RGB color values to their HEXadecimal representation.",
                "Quickly convert RGB color codes (e.g., rgb(255, 0, 0)) to their corresponding HEX format (e.g., #FF0000). Essential for web designers and developers.",
                &["rgb to hex", "color converter", "web design", "css colors", "hex code"],
            ),
            Arc::new(RgbToHexTool),
        ),
        (
            describe(
                "hex-to-rgb-converter",
                "HEX to RGB Converter",
                Converters,
                "Pipette",
                "Convert HEX color codes to RGB values.",
                "Convert hexadecimal color codes (e.g., #FF0000) to their RGB representation (e.g., rgb(255, 0, 0)). Useful for web development and design tasks.",
                &["hex to rgb", "color converter", "web design", "css colors", "rgb values"],
            ),
            Arc::new(HexToRgbTool),
        ),
        (
            describe(
                "youtube-thumbnail-downloader",
                "YouTube Thumbnail Downloader",
                MediaTools,
                "Download",
                "Download high-quality thumbnails from YouTube videos.",
                "Get YouTube video thumbnails in every published resolution, from 120x90 up to 1280x720. Just paste the video URL.",
                &["youtube thumbnail", "downloader", "video image", "youtube tool"],
            ),
            Arc::new(YoutubeThumbnailTool),
        ),
        (
            describe(
                "age-calculator",
                "Age Calculator",
                Calculators,
                "CalendarDays",
                "Calculate age based on date of birth and a target date.",
                "Determine age in years, months, and days by providing a birth date and an optional target date (defaults to today). Useful for various age-related calculations.",
                &["age calculator", "date calculation", "birthday calculator", "chronological age"],
            ),
            Arc::new(AgeCalculatorTool),
        ),
        (
            describe(
                "bmi-calculator",
                "BMI Calculator",
                Calculators,
                "Calculator",
                "Calculate your Body Mass Index (BMI) using metric or imperial units.",
                "Determine your Body Mass Index by entering your height and weight. Supports both metric (cm, kg) and imperial (ft, in, lbs) units.",
                &["bmi calculator", "health tool", "body mass index", "weight management"],
            ),
            Arc::new(BmiCalculatorTool),
        ),
        (
            describe(
                "loan-calculator",
                "Loan Calculator",
                Calculators,
                "Landmark",
                "Calculate loan payments and total interest.",
                "Estimate your monthly loan payment, total interest, and total amount paid based on loan amount, interest rate, and term.",
                &["loan calculator", "finance tool", "mortgage calculator", "monthly payment"],
            ),
            Arc::new(LoanCalculatorTool),
        ),
        (
            describe(
                "percentage-calculator",
                "Percentage Calculator",
                Calculators,
                "Percent",
                "Calculate various percentage problems easily.",
                "Perform various percentage calculations, such as finding X% of Y, determining what percentage X is of Y, or calculating percentage change.",
                &["percentage calculator", "math tool", "percent", "discount calculator"],
            ),
            Arc::new(PercentageCalculatorTool),
        ),
        (
            describe(
                "base64-encoder",
                "Base64 Encoder",
                DeveloperTools,
                "Parentheses",
                "Encode your text or data into Base64 format.",
                "Convert plain text or other data into its Base64 encoded string representation. Handles UTF-8 characters.",
                &["base64 encode", "data encoding", "string encoding", "developer tool", "utf8"],
            ),
            Arc::new(Base64EncoderTool),
        ),
        (
            describe(
                "base64-decoder",
                "Base64 Decoder",
                DeveloperTools,
                "Parentheses",
                "Decode Base64 encoded strings back to their original form.",
                "Convert Base64 encoded strings back into their original human-readable format. Handles UTF-8 characters.",
                &["base64 decode", "data decoding", "string decoding", "developer tool", "utf8"],
            ),
            Arc::new(Base64DecoderTool),
        ),
        (
            describe(
                "json-formatter",
                "JSON Formatter",
                DeveloperTools,
                "FileJson",
                "Format and validate JSON data for readability or minify it.",
                "Beautify (pretty-print) your JSON data to make it human-readable or minify it to reduce size. Also validates JSON structure.",
                &["json formatter", "json validator", "json beautifier", "json minifier", "developer tool"],
            ),
            Arc::new(JsonFormatterTool),
        ),
        (
            describe(
                "xml-formatter",
                "XML Formatter",
                DeveloperTools,
                "FileJson",
                "Format and validate XML data for improved readability.",
                "Beautify (pretty-print) your XML data to make it easier to read and understand. Checks for well-formedness.",
                &["xml formatter", "xml validator", "xml beautifier", "developer tool", "pretty print xml"],
            ),
            Arc::new(XmlFormatterTool),
        ),
        (
            describe(
                "html-minifier",
                "HTML Minifier",
                DeveloperTools,
                "Minimize2",
                "Minify HTML code to reduce file size and improve load times.",
                "Remove unnecessary characters from HTML code, like whitespace and comments, to reduce file size.",
                &["html minifier", "code optimization", "web performance", "developer tool", "minify html"],
            ),
            Arc::new(HtmlMinifierTool),
        ),
        (
            describe(
                "css-minifier",
                "CSS Minifier",
                DeveloperTools,
                "Minimize2",
                "Minify CSS code to reduce file size for faster website loading.",
                "Compress CSS code by removing unnecessary characters, such as whitespace and comments, to optimize file size.",
                &["css minifier", "code optimization", "stylesheet optimization", "developer tool", "minify css"],
            ),
            Arc::new(CssMinifierTool),
        ),
        (
            describe(
                "javascript-minifier",
                "JavaScript Minifier",
                DeveloperTools,
                "Minimize2",
                "Minify JavaScript code for smaller file sizes and faster execution.",
                "Reduce the size of JavaScript files by removing comments and some whitespace. Note: This is a very basic minifier, not suitable for production without testing.",
                &["js minifier", "javascript optimization", "code compression", "developer tool", "minify js"],
            ),
            Arc::new(JsMinifierTool),
        ),
        (
            describe(
                "image-to-base64",
                "Image to Base64",
                Converters,
                "Image",
                "Convert images (JPEG, PNG, etc.) into Base64 encoded strings.",
                "Encode image files into Base64 strings, useful for embedding images directly in HTML or CSS. Generates a full Data URI.",
                &["image to base64", "image encoding", "data uri", "web development"],
            ),
            Arc::new(ImageToBase64Tool),
        ),
        (
            describe(
                "base64-to-image",
                "Base64 to Image",
                Converters,
                "Image",
                "Convert Base64 encoded strings (Data URI) back into viewable images.",
                "Decode Base64 Data URI strings back into image bytes. Supports common image types.",
                &["base64 to image", "image decoding", "data uri", "web development"],
            ),
            Arc::new(Base64ToImageTool),
        ),
        (
            describe(
                "time-converter",
                "Time Converter",
                Converters,
                "Clock",
                "Convert between different units of time (seconds, minutes, hours, etc.).",
                "Easily convert time values between various units, such as seconds, minutes, hours, days, weeks, months, and years.",
                &["time converter", "unit conversion", "time calculation", "duration converter"],
            ),
            Arc::new(TimeConverterTool),
        ),
        (
            describe(
                "epoch-to-human-date-converter",
                "Epoch to Human Date Converter",
                Converters,
                "CalendarDays",
                "Convert Epoch timestamps (Unix time) to human-readable dates.",
                "Translate Unix epoch timestamps (in seconds or milliseconds) into easily understandable date and time formats.",
                &["epoch converter", "timestamp tool", "unix time", "date conversion"],
            ),
            Arc::new(EpochConverterTool),
        ),
        (
            describe(
                "text-repeater",
                "Text Repeater",
                TextUtilities,
                "Repeat",
                "Repeat a piece of text a specified number of times.",
                "Generate repeated text quickly. Enter your text and the number of repetitions desired.",
                &["text repeater", "string tool", "repeat text", "content generation"],
            ),
            Arc::new(TextRepeaterTool),
        ),
        (
            describe(
                "remove-duplicate-lines",
                "Remove Duplicate Lines",
                TextUtilities,
                "RemoveFormatting",
                "Remove duplicate lines from a block of text.",
                "Clean up your text by removing any lines that are exact duplicates, keeping only unique lines. Options for case sensitivity and whitespace trimming.",
                &["duplicate lines remover", "text cleanup", "unique lines", "data processing"],
            ),
            Arc::new(RemoveDuplicateLinesTool),
        ),
        (
            describe(
                "text-sorting-tool",
                "Text Sorting Tool",
                TextUtilities,
                "SortAsc",
                "Sort lines of text alphabetically, by length, or numerically.",
                "Organize lines of text by sorting them in ascending or descending order. Supports alphabetical, length-based, and numeric sorting.",
                &["text sorter", "alphabetical sort", "line sorting", "data organization", "numeric sort"],
            ),
            Arc::new(TextSortingTool),
        ),
        (
            describe(
                "online-notepad",
                "Online Notepad",
                Productivity,
                "Notebook",
                "A simple online notepad for quick notes and temporary text storage.",
                "Jot down quick notes, ideas, or temporary text with this simple notepad. The note is kept until you clear it.",
                &["notepad online", "text editor", "quick notes", "scratchpad"],
            ),
            Arc::new(NotepadTool::new(config.notepad_store.clone())),
        ),
        (
            describe(
                "palindrome-checker",
                "Palindrome Checker",
                TextUtilities,
                "SpellCheck",
                "Check if a word, phrase, or number is a palindrome.",
                "Determine if the entered text or number reads the same forwards and backward (is a palindrome). Options to ignore case and punctuation.",
                &["palindrome checker", "string tool", "word game", "reverse text"],
            ),
            Arc::new(PalindromeCheckerTool),
        ),
        (
            describe(
                "number-to-words-converter",
                "Number to Words Converter",
                Converters,
                "Type",
                "Convert numbers into their word representation (e.g., 123 to \"one hundred twenty-three\").",
                "Translate numerical figures into written words, useful for checks, legal documents, or readability. Supports integers.",
                &["number to words", "text conversion", "spell number", "numeric to text"],
            ),
            Arc::new(NumberToWordsTool),
        ),
        (
            describe(
                "words-to-number-converter",
                "Words to Number Converter",
                Converters,
                "Calculator",
                "Convert number words (e.g., \"one hundred twenty-three\") to digits (123).",
                "Translate written number words back into their numerical digit form. Supports basic English number phrasing.",
                &["words to number", "text conversion", "text to numeric", "data entry"],
            ),
            Arc::new(WordsToNumberTool),
        ),
        (
            describe(
                "text-encryptor-decryptor",
                "Text Encryptor/Decryptor",
                Security,
                "Lock",
                "Encrypt and decrypt text using AES-GCM algorithm.",
                "Secure your text by encrypting it with AES-GCM, and decrypt it back when needed. Requires a password.",
                &["text encryption", "text decryption", "security", "cipher", "privacy tool", "aes", "gcm"],
            ),
            Arc::new(TextCipherTool),
        ),
        (
            describe(
                "binary-to-decimal-converter",
                "Binary to Decimal Converter",
                Converters,
                "Binary",
                "Convert binary numbers (base-2) to decimal numbers (base-10).",
                "Translate binary numbers into their decimal equivalents.",
                &["binary to decimal", "number system", "base conversion", "computer science"],
            ),
            Arc::new(BinaryToDecimalTool),
        ),
        (
            describe(
                "decimal-to-binary-converter",
                "Decimal to Binary Converter",
                Converters,
                "Hash",
                "Convert decimal numbers (base-10) to binary numbers (base-2).",
                "Translate non-negative decimal numbers into their binary equivalents.",
                &["decimal to binary", "number system", "base conversion", "computer science"],
            ),
            Arc::new(DecimalToBinaryTool),
        ),
    ];

    #[cfg(feature = "network")]
    tools.extend::<[CatalogEntry; 2]>([
        (
            describe(
                "ip-address-checker",
                "IP Address Checker",
                NetworkTools,
                "Globe",
                "Check your public IP address.",
                "Find out the public IP address this server is reachable from, as reported by ipify.",
                &["ip address", "network tool", "my ip"],
            ),
            Arc::new(IpAddressCheckerTool::new(
                config.ipify_url.clone(),
                config.network_timeout,
            )),
        ),
        (
            describe(
                "domain-age-checker",
                "Domain Age Checker",
                SeoTools,
                "Globe",
                "Check the age of a domain name.",
                "Discover how old a domain name is by looking up its registration date in RDAP.",
                &["domain age", "seo tool", "rdap lookup", "website analysis"],
            ),
            Arc::new(DomainAgeCheckerTool::new(
                config.rdap_url.clone(),
                config.network_timeout,
            )),
        ),
    ]);

    tools.extend::<[CatalogEntry; 11]>([
        (
            describe(
                "meta-tag-generator",
                "Meta Tag Generator",
                SeoTools,
                "Tag",
                "Generate HTML meta tags for SEO and social sharing.",
                "Create essential HTML meta tags (title, description, keywords, Open Graph, Twitter Cards) for your web pages.",
                &["meta tag generator", "seo tool", "html meta tags", "open graph", "twitter cards"],
            ),
            Arc::new(MetaTagGeneratorTool),
        ),
        (
            describe(
                "utm-link-generator",
                "UTM Link Generator",
                MarketingTools,
                "Link2",
                "Generate UTM tracking links for your marketing campaigns.",
                "Easily create URLs with UTM parameters to track the effectiveness of your online marketing campaigns.",
                &["utm generator", "marketing tool", "campaign tracking", "url builder"],
            ),
            Arc::new(UtmLinkGeneratorTool),
        ),
        (
            describe(
                "email-validator",
                "Email Validator",
                ValidationTools,
                "MailCheck",
                "Validate the format of email addresses (syntax check).",
                "Check if an email address is syntactically correct. (Note: Does not verify actual existence).",
                &["email validator", "data validation", "email format", "syntax check"],
            ),
            Arc::new(EmailValidatorTool),
        ),
        (
            describe(
                "credit-card-validator",
                "Credit Card Validator",
                ValidationTools,
                "CreditCard",
                "Validate credit card numbers using the Luhn algorithm (for format checking only).",
                "Check if a credit card number is potentially valid based on the Luhn algorithm. Does not verify authenticity or funds.",
                &["credit card validator", "luhn algorithm", "format validation", "security (test tool)"],
            ),
            Arc::new(CreditCardValidatorTool),
        ),
        (
            describe(
                "md5-hash-generator",
                "MD5 Hash Generator",
                Security,
                "Hash",
                "Generate MD5 and SHA-1 hashes for any given text.",
                "Create MD5 and SHA-1 digests of your input text. Neither is collision resistant; use them for checksums or legacy needs only.",
                &["md5 generator", "sha1 generator", "hashing tool", "checksum"],
            ),
            Arc::new(Md5HashTool),
        ),
        (
            describe(
                "sha256-hash-generator",
                "SHA256 Hash Generator",
                Security,
                "Hash",
                "Generate SHA256 hash for your text or data.",
                "Produce a SHA256 hash from your input text. SHA256 is a secure hashing algorithm.",
                &["sha256 generator", "hashing tool", "cryptography", "secure hash"],
            ),
            Arc::new(Sha256HashTool),
        ),
        (
            describe(
                "unit-converter",
                "Unit Converter",
                Converters,
                "Scale",
                "Convert various units (length, weight, volume).",
                "A comprehensive tool to convert between different units of measurement for length, weight, and volume.",
                &["unit converter", "measurement tool", "conversion calculator", "metric imperial", "length", "weight", "volume"],
            ),
            Arc::new(UnitConverterTool),
        ),
        (
            describe(
                "temperature-converter",
                "Temperature Converter",
                Converters,
                "Thermometer",
                "Convert temperatures between Celsius, Fahrenheit, and Kelvin.",
                "Easily switch temperature values between Celsius (°C), Fahrenheit (°F), and Kelvin (K).",
                &["temperature converter", "conversion tool", "celsius", "fahrenheit", "kelvin"],
            ),
            Arc::new(TemperatureConverterTool),
        ),
        (
            describe(
                "stopwatch",
                "Stopwatch",
                Productivity,
                "Timer",
                "An online stopwatch to measure elapsed time with lap functionality.",
                "Format elapsed time as HH:MM:SS.cc and split recorded laps into per-lap and running totals.",
                &["stopwatch", "timer online", "lap timer", "time measurement"],
            ),
            Arc::new(StopwatchTool),
        ),
        (
            describe(
                "countdown-timer",
                "Countdown Timer",
                Productivity,
                "Timer",
                "Set an online countdown timer for various purposes.",
                "A versatile online countdown timer. Set a duration in hours, minutes and seconds (or as text like \"1h 30m\") and see when it ends.",
                &["countdown timer", "timer online", "alarm", "time management"],
            ),
            Arc::new(CountdownTimerTool),
        ),
        (
            describe(
                "text-diff-checker",
                "Text Diff Checker",
                TextUtilities,
                "Shuffle",
                "Compare two blocks of text and highlight the differences.",
                "Easily find the differences between two pieces of text. Ideal for comparing documents or code snippets. Supports character, word, and line-level diffs.",
                &["text diff", "compare text", "difference checker", "file comparison"],
            ),
            Arc::new(TextDiffTool),
        ),
    ]);

    tools
}

/// Registry holding the whole standard catalog.
pub fn standard_registry(config: StandardToolsConfig) -> Result<InMemoryToolRegistry, RegistryError> {
    let mut registry = InMemoryToolRegistry::new();
    for (descriptor, tool) in standard_tools(config) {
        registry.register(descriptor, tool)?;
    }
    tracing::debug!(tools = registry.len(), "Built standard tool registry");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbox_core::ToolCall;

    use crate::registry::ToolRegistry;

    fn registry() -> InMemoryToolRegistry {
        standard_registry(StandardToolsConfig::default()).unwrap()
    }

    #[test]
    fn every_slug_is_valid_and_unique() {
        let registry = registry();
        for descriptor in registry.descriptors() {
            assert!(
                ToolSlug::parse(descriptor.slug.as_str()).is_ok(),
                "{}",
                descriptor.slug
            );
        }
        assert_eq!(registry.len(), standard_tools(StandardToolsConfig::default()).len());
    }

    #[test]
    fn excluded_tools_are_absent() {
        let registry = registry();
        for slug in [
            "seo-optimizer",
            "text-to-speech",
            "speech-to-text",
            "youtube-to-mp3-converter",
            "youtube-to-mp4-converter",
            "image-compressor",
        ] {
            assert!(registry.get_tool_by_slug(slug).is_none(), "{slug}");
        }
    }

    #[test]
    fn color_picker_is_a_design_tool() {
        let registry = registry();
        let groups = registry.tools_by_category();
        let design: Vec<&str> = groups[&Category::DesignTools].iter().map(|d| d.name).collect();
        assert_eq!(design, vec!["Color Picker"]);
        assert!(!groups.contains_key(&Category::AiSeo));
    }

    #[test]
    fn page_metadata() {
        let registry = registry();
        let descriptor = registry.get_tool_by_slug("word-counter").unwrap();
        assert_eq!(descriptor.page_title(), "Word Counter - Toolbox Online");
        assert!(descriptor.page_description().starts_with("Easily count"));
    }

    #[test]
    fn dispatches_through_catalog() {
        let registry = registry();
        let result = registry
            .dispatch(ToolCall::new("sha256-hash-generator", "abc").unwrap())
            .unwrap();
        assert_eq!(
            result.output_json().unwrap()["sha256"],
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn notepad_uses_configured_store() {
        let config = StandardToolsConfig::default();
        let store = config.notepad_store.clone();
        let registry = standard_registry(config).unwrap();
        registry
            .dispatch(
                ToolCall::new("online-notepad", r#"{"action":"save","content":"hi"}"#).unwrap(),
            )
            .unwrap();
        let reader = NotepadTool::new(store);
        assert_eq!(reader.load().unwrap().content, "hi");
    }
}
