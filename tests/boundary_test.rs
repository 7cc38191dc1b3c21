use tag_lineage::boundary::BoundaryWarning;
use tag_lineage::ui;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_unsupported_tag_display() {
    let warning = BoundaryWarning::UnsupportedTag {
        tag: "not-a-version-tag".to_string(),
    };

    let display_msg = warning.to_string();
    assert_eq!(display_msg, "unsupported tag not-a-version-tag");
}

#[test]
fn test_boundary_warning_no_version_tags_display() {
    let warning = BoundaryWarning::NoVersionTags {
        total: 12,
        prefix: "CW-[CS]10-".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("12 tags"),
        "Message should contain the tag count, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("CW-[CS]10-"),
        "Message should contain the prefix, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_equality() {
    let a = BoundaryWarning::UnsupportedTag {
        tag: "v1".to_string(),
    };
    let b = BoundaryWarning::UnsupportedTag {
        tag: "v1".to_string(),
    };
    assert_eq!(a, b);
}

// ============================================================================
// Display Function Tests
// ============================================================================

#[test]
fn test_display_boundary_warning_does_not_panic() {
    ui::display_boundary_warning(&BoundaryWarning::UnsupportedTag {
        tag: "junk".to_string(),
    });
    ui::display_boundary_warning(&BoundaryWarning::NoVersionTags {
        total: 0,
        prefix: String::new(),
    });
}
