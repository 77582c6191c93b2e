// Shared fixtures for the integration tests.
//
// Each fixture is a trimmed-down response body as the classifieds API sends it.

#![allow(dead_code)] // Not every test file uses every fixture

use std::path::{Path, PathBuf};

pub const NAMESPACES: &str = r#"xmlns:ad="http://www.ebayclassifiedsgroup.com/schema/ad/v1"
    xmlns:types="http://www.ebayclassifiedsgroup.com/schema/types/v1"
    xmlns:cat="http://www.ebayclassifiedsgroup.com/schema/category/v1"
    xmlns:loc="http://www.ebayclassifiedsgroup.com/schema/location/v1"
    xmlns:pic="http://www.ebayclassifiedsgroup.com/schema/picture/v1"
    xmlns:attr="http://www.ebayclassifiedsgroup.com/schema/attribute/v1""#;

/// An `ad:ad` element with the given id attribute and inner markup.
pub fn ad_element(id: Option<&str>, inner: &str) -> String {
    match id {
        Some(id) => format!(r#"<ad:ad id="{id}">{inner}</ad:ad>"#),
        None => format!("<ad:ad>{inner}</ad:ad>"),
    }
}

/// A single-advert document.
pub fn advert_document(id: &str, inner: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><ad:ad {NAMESPACES} id="{id}">{inner}</ad:ad>"#
    )
}

/// A listing document wrapping `ads` with page options and a hit count.
pub fn listing_document(ads: &[String], page: u64, size: u64, found: u64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ad:ads {NAMESPACES}>
    <ad:ads-search-options><ad:page>{page}</ad:page><ad:size>{size}</ad:size></ad:ads-search-options>
    <types:paging><types:numFound>{found}</types:numFound></types:paging>
    {}
</ad:ads>"#,
        ads.concat()
    )
}

pub const SOFA_INNER: &str = r#"
    <ad:ad-type><ad:value>OFFERED</ad:value></ad:ad-type>
    <ad:title>Leather sofa</ad:title>
    <ad:description>&lt;p&gt;Three seater&lt;/p&gt;</ad:description>
    <ad:price>
        <types:price-type><types:value>FIXED</types:value></types:price-type>
        <types:amount>450.99</types:amount>
    </ad:price>
    <cat:category id="20045"><cat:localized-name>Sofas</cat:localized-name></cat:category>
    <ad:ad-address>
        <types:longitude>151.2070</types:longitude>
        <types:latitude>-33.8675</types:latitude>
    </ad:ad-address>
    <pic:pictures>
        <pic:picture>
            <pic:link rel="thumbnail" href="https://img.example/1_14.jpg"/>
            <pic:link rel="large" href="https://img.example/1_27.jpg"/>
        </pic:picture>
    </pic:pictures>
"#;

pub const TAXONOMY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<cat:categories xmlns:cat="http://www.ebayclassifiedsgroup.com/schema/category/v1">
    <cat:category id="0">
        <cat:localized-name>All Categories</cat:localized-name>
        <cat:id-name>all</cat:id-name>
        <cat:children-count>1</cat:children-count>
        <cat:category id="9299">
            <cat:localized-name>Cars &amp; Vehicles</cat:localized-name>
            <cat:id-name>cars-vehicles</cat:id-name>
            <cat:parent-id>0</cat:parent-id>
            <cat:children-count>1</cat:children-count>
            <cat:category id="18320">
                <cat:localized-name>Cars, Vans &amp; Utes</cat:localized-name>
                <cat:id-name>cars-vans-utes</cat:id-name>
                <cat:parent-id>9299</cat:parent-id>
                <cat:l1-name>cars-vehicles</cat:l1-name>
                <cat:children-count>0</cat:children-count>
            </cat:category>
        </cat:category>
    </cat:category>
</cat:categories>"#;

pub const API_ERROR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<api-base-error http-status-code="404">
    <api-errors><api-error><message>Ad not found</message></api-error></api-errors>
</api-base-error>"#;

/// Writes `body` to `name` inside `dir` and returns the path.
pub fn write_fixture(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).expect("Failed to write fixture");
    path
}
