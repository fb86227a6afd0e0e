use super::*;

// -----------------------------------------------------------------------
// end to end
// -----------------------------------------------------------------------

#[test]
fn extracts_full_english_tile() {
    let specs =
        extract("13-inch macbook air m2 chip 8gb unified memory 256gb ssd 13.6\" ");
    assert_eq!(specs.ram_gb, Some(8));
    assert_eq!(specs.storage_gb, Some(256));
    assert_eq!(specs.chip.as_deref(), Some("M2"));
    assert_eq!(specs.screen_inches, Some(Decimal::new(136, 1)));
    assert_eq!(specs.device_type, DeviceType::MacBookAir);
}

#[test]
fn extracts_german_tile_with_nbsp() {
    let specs = parse_specs(
        "MacBook Pro 14,2\u{201d} mit Apple M3 Pro Chip – 18\u{a0}GB gemeinsamer Arbeitsspeicher, 1\u{a0}TB SSD",
    );
    assert_eq!(specs.ram_gb, Some(18));
    assert_eq!(specs.storage_gb, Some(1024));
    assert_eq!(specs.chip.as_deref(), Some("M3 Pro"));
    assert_eq!(specs.screen_inches, Some(Decimal::new(142, 1)));
    assert_eq!(specs.device_type, DeviceType::MacBookPro);
}

#[test]
fn extracts_french_tile() {
    let specs = parse_specs("Mac mini avec puce M2 Pro, 16 Go de mémoire unifiée, stockage de 512 Go");
    assert_eq!(specs.ram_gb, Some(16));
    assert_eq!(specs.storage_gb, Some(512));
    assert_eq!(specs.chip.as_deref(), Some("M2 Pro"));
    assert_eq!(specs.device_type, DeviceType::MacMini);
}

#[test]
fn extracts_polish_short_format() {
    let specs = parse_specs("Odnowiony iMac 24 cale z czipem M3 – 8 GB zunifikowanej pamięci, SSD 256 GB");
    assert_eq!(specs.ram_gb, Some(8));
    assert_eq!(specs.storage_gb, Some(256));
    assert_eq!(specs.chip.as_deref(), Some("M3"));
    assert_eq!(specs.device_type, DeviceType::IMac);
}

#[test]
fn extracts_dutch_reverse_storage() {
    let specs = parse_specs("Mac Studio met M2 Ultra, 64 GB centraal geheugen, SSD van 1 TB");
    assert_eq!(specs.ram_gb, Some(64));
    assert_eq!(specs.storage_gb, Some(1024));
    assert_eq!(specs.chip.as_deref(), Some("M2 Ultra"));
    assert_eq!(specs.device_type, DeviceType::MacStudio);
}

// -----------------------------------------------------------------------
// memory
// -----------------------------------------------------------------------

#[test]
fn memory_never_taken_from_bare_capacity() {
    let specs = extract("macbook air m2 8gb 256gb ssd");
    assert_eq!(specs.ram_gb, None);
    assert_eq!(specs.storage_gb, Some(256));
}

#[test]
fn memory_prefers_unified_phrase_over_generic_keyword() {
    // The generic rule alone would pick the first "<n> gb ram".
    let specs = extract("upgradeable from 8 gb ram; configured with 16 gb unified memory");
    assert_eq!(specs.ram_gb, Some(16));
}

#[test]
fn memory_falls_back_to_generic_keyword() {
    let specs = extract("mac mini m1 16 gb arbeitsspeicher");
    assert_eq!(specs.ram_gb, Some(16));
}

// -----------------------------------------------------------------------
// storage
// -----------------------------------------------------------------------

#[test]
fn storage_terabytes_become_gigabytes() {
    assert_eq!(extract("2tb ssd").storage_gb, Some(2048));
    assert_eq!(extract("ssd 4 to").storage_gb, Some(4096));
    assert_eq!(extract("stockage de 1 to").storage_gb, Some(1024));
}

#[test]
fn storage_ssd_prefix_beats_generic_suffix_rule() {
    // The generic suffix rule alone would read "512 gb ssd" further on.
    let specs = extract("ssd 256 gb, upgrade to 512 gb ssd");
    assert_eq!(specs.storage_gb, Some(256));
}

#[test]
fn storage_falls_back_to_capacity_label() {
    assert_eq!(extract("capacity 512gb").storage_gb, Some(512));
}

#[test]
fn storage_unresolved_without_keyword() {
    assert_eq!(extract("16gb unified memory").storage_gb, None);
}

// -----------------------------------------------------------------------
// chip
// -----------------------------------------------------------------------

#[test]
fn chip_with_variant_is_title_cased() {
    assert_eq!(extract("apple m2 pro chip").chip.as_deref(), Some("M2 Pro"));
    assert_eq!(extract("m1 max").chip.as_deref(), Some("M1 Max"));
}

#[test]
fn chip_without_variant() {
    assert_eq!(extract("chip m3 with 8-core cpu").chip.as_deref(), Some("M3"));
}

#[test]
fn chip_ignores_variant_prefix_of_longer_word() {
    assert_eq!(extract("m2 professional").chip.as_deref(), Some("M2"));
}

#[test]
fn chip_requires_word_boundary() {
    assert_eq!(extract("am2 socket").chip, None);
    assert_eq!(extract("m9 chip").chip, None);
}

// -----------------------------------------------------------------------
// screen
// -----------------------------------------------------------------------

#[test]
fn screen_comma_is_decimal_point() {
    assert_eq!(
        extract("15,3\u{201d} liquid retina").screen_inches,
        Some(Decimal::new(153, 1))
    );
}

#[test]
fn screen_needs_inch_mark() {
    assert_eq!(extract("13.6 inch").screen_inches, None);
    assert_eq!(extract("24 \"").screen_inches, None);
}

// -----------------------------------------------------------------------
// device type
// -----------------------------------------------------------------------

#[test]
fn device_type_defaults_to_mac() {
    assert_eq!(extract("refurbished computer").device_type, DeviceType::Mac);
}

#[test]
fn device_type_named_lines_win_over_pro_catch_all() {
    assert_eq!(extract("macbook pro 16").device_type, DeviceType::MacBookPro);
    assert_eq!(extract("imac pro").device_type, DeviceType::IMac);
}

#[test]
fn device_type_pro_and_mac_catch_all() {
    assert_eq!(
        extract("mac pro with m2 ultra").device_type,
        DeviceType::MacPro
    );
}

// -----------------------------------------------------------------------
// totality
// -----------------------------------------------------------------------

#[test]
fn extract_is_total_on_odd_input() {
    for text in ["", "\"\"\"", "99999999999999999999 gb ssd", "ssd ssd ssd", "m", "1,2,3,4\""] {
        let specs = extract(text);
        assert_eq!(specs.device_type, DeviceType::Mac);
    }
}
