//! Advert builder.
//!
//! Only the advert id can abort a build. Every other field is resolved
//! through the fallback policy and tagged with its wire path, so the error
//! list of a build reads like `ads/ad/price/amount`,
//! `ads/ad/pictures[1]/large`, ... Inside a listing the advert itself is
//! indexed too: `ads/ad[2]/price/amount`.

use crate::config::{PICTURE_VARIANTS, UNKNOWN_PRICE_TYPE};
use crate::error_handling::{resolve, DecodeError, ErrorReport, FieldErrorKind};
use crate::extract;
use crate::models::{
    Advert, Attribute, CategoryRef, Contact, Coordinate, Location, Picture, Position, Price,
    Timestamps,
};
use crate::xml::Element;

use super::description::DescriptionTransform;
use super::optional;

/// Error tag of `field` within an advert's scope.
fn at(scope: &str, field: &str) -> String {
    format!("{scope}/{field}")
}

const CURRENCY_VALUE: &str = "ad:price/types:currency-iso-code/types:value";

/// Builds an [`Advert`] from an `ad:ad` element.
///
/// Every error tag starts with `scope`: `ads/ad` for a stand-alone advert,
/// `ads/ad[i]` for the i-th advert of a listing.
///
/// Fails with [`DecodeError::MissingIdentifier`] when the `id` attribute is
/// absent or not an unsigned integer. Soft failures go to `report`.
pub fn build_advert(
    ad: &Element,
    scope: &str,
    transform: &dyn DescriptionTransform,
    report: &mut ErrorReport,
) -> Result<Advert, DecodeError> {
    let id = extract::uint_attr(ad, "id").map_err(|kind| DecodeError::MissingIdentifier {
        tag: at(scope, "id"),
        kind,
    })?;

    let kind = optional(
        extract::text(ad, "ad:ad-type/ad:value"),
        at(scope, "type"),
        report,
    );
    let user_id = optional(extract::uint(ad, "ad:user-id"), at(scope, "user_id"), report);
    let status = optional(
        extract::text(ad, "ad:ad-status/ad:value"),
        at(scope, "status"),
        report,
    );
    let poster_type = optional(
        extract::text(ad, "ad:poster-type/ad:value"),
        at(scope, "poster_type"),
        report,
    );
    let title = resolve(
        extract::text(ad, "ad:title"),
        String::new(),
        at(scope, "title"),
        report,
    );

    let description_html = optional(
        extract::text(ad, "ad:description"),
        at(scope, "desc_excerpt_html"),
        report,
    );
    let description_plain_b64 = description_html
        .as_deref()
        .filter(|html| !html.is_empty())
        .and_then(|html| {
            optional(
                transform.render(html).map_err(FieldErrorKind::from),
                at(scope, "desc_excerpt_plain_b64"),
                report,
            )
        });

    let price = build_price(ad, scope, report);
    let contact = build_contact(ad, scope, report);
    let category = build_category(ad, scope, report);
    let position = build_position(ad, scope, report);
    let pictures = build_pictures(ad, scope, report);
    let attributes = build_attributes(ad, scope, report);
    let timestamp = build_timestamps(ad, scope, report);

    Ok(Advert {
        id,
        kind,
        user_id,
        status,
        poster_type,
        title,
        description_html,
        description_plain_b64,
        price,
        contact,
        category,
        position,
        pictures,
        attributes,
        timestamp,
    })
}

fn build_price(ad: &Element, scope: &str, report: &mut ErrorReport) -> Price {
    Price {
        price_type: resolve(
            extract::text(ad, "ad:price/types:price-type/types:value"),
            UNKNOWN_PRICE_TYPE.to_string(),
            at(scope, "price/type"),
            report,
        ),
        amount: resolve(
            extract::money(ad, "ad:price/types:amount"),
            0,
            at(scope, "price/amount"),
            report,
        ),
        highest_amount: resolve(
            extract::money(ad, "ad:highest-price"),
            0,
            at(scope, "price/highest_amount"),
            report,
        ),
        currency: optional(
            extract::text(ad, CURRENCY_VALUE),
            at(scope, "price/currency"),
            report,
        ),
        currency_symbol: optional(
            extract::attr_at(ad, CURRENCY_VALUE, "localized-label"),
            at(scope, "price/currency_symbol"),
            report,
        ),
    }
}

fn build_contact(ad: &Element, scope: &str, report: &mut ErrorReport) -> Contact {
    Contact {
        name: optional(
            extract::text(ad, "ad:poster-contact-name"),
            at(scope, "contact/name"),
            report,
        ),
        phone: optional(
            extract::text(ad, "ad:phone").map(|phone| phone.replace(' ', "")),
            at(scope, "contact/phone"),
            report,
        ),
    }
}

/// The reference exists only when `cat:category` carries a usable id.
fn build_category(ad: &Element, scope: &str, report: &mut ErrorReport) -> Option<CategoryRef> {
    let identified = extract::find(ad, "cat:category")
        .ok_or(FieldErrorKind::Absent)
        .and_then(|cat| extract::uint_attr(cat, "id").map(|id| (cat, id)));
    let (cat, id) = optional(identified, at(scope, "category"), report)?;

    Some(CategoryRef {
        id,
        name: resolve(
            extract::text(cat, "cat:localized-name"),
            String::new(),
            at(scope, "category/name"),
            report,
        ),
        slug: optional(
            extract::text(cat, "cat:id-name"),
            at(scope, "category/slug"),
            report,
        ),
        parent_slug: optional(
            extract::text(cat, "cat:l1-name"),
            at(scope, "category/parent_slug"),
            report,
        ),
        children_count: resolve(
            extract::uint(cat, "cat:children-count"),
            0,
            at(scope, "category/children_count"),
            report,
        ),
    })
}

fn build_position(ad: &Element, scope: &str, report: &mut ErrorReport) -> Position {
    let address = optional(
        extract::text(ad, "ad:ad-address/types:full-address"),
        at(scope, "positions/address"),
        report,
    );
    let city = optional(
        extract::text(ad, "ad:ad-address/types:city"),
        at(scope, "positions/city"),
        report,
    );
    let state = optional(
        extract::text(ad, "ad:ad-address/types:state"),
        at(scope, "positions/state"),
        report,
    );
    let country = optional(
        extract::text(ad, "ad:ad-address/types:country"),
        at(scope, "positions/country"),
        report,
    );

    // both or neither
    let coordinate = optional(
        extract::float(ad, "ad:ad-address/types:longitude").and_then(|longitude| {
            extract::float(ad, "ad:ad-address/types:latitude").map(|latitude| Coordinate {
                longitude,
                latitude,
            })
        }),
        at(scope, "positions/coordinate"),
        report,
    );

    let locations = extract::find_all(ad, "loc:locations/loc:location")
        .into_iter()
        .enumerate()
        .map(|(i, loc)| Location {
            id: resolve(
                extract::uint_attr(loc, "id"),
                0,
                format!("{scope}/positions/locations[{i}]/id"),
                report,
            ),
            name: resolve(
                extract::text(loc, "loc:localized-name"),
                String::new(),
                format!("{scope}/positions/locations[{i}]/name"),
                report,
            ),
            parent_id: optional(
                extract::uint(loc, "loc:parent-id"),
                format!("{scope}/positions/locations[{i}]/parent_id"),
                report,
            ),
        })
        .collect();

    Position {
        address,
        city,
        state,
        country,
        coordinate,
        locations,
    }
}

fn build_pictures(ad: &Element, scope: &str, report: &mut ErrorReport) -> Vec<Picture> {
    extract::find_all(ad, "pic:pictures/pic:picture")
        .into_iter()
        .enumerate()
        .map(|(i, pic)| {
            let [thumbnail, normal, large, extra_large, extra_extra_large] =
                PICTURE_VARIANTS.map(|(rel, field)| {
                    optional(
                        extract::attr_at(pic, &format!("pic:link[@rel='{rel}']"), "href"),
                        format!("{scope}/pictures[{i}]/{field}"),
                        report,
                    )
                });
            Picture {
                thumbnail,
                normal,
                large,
                extra_large,
                extra_extra_large,
            }
        })
        .collect()
}

fn build_attributes(ad: &Element, scope: &str, report: &mut ErrorReport) -> Vec<Attribute> {
    extract::find_all(ad, "attr:attributes/attr:attribute")
        .into_iter()
        .enumerate()
        .map(|(i, attribute)| {
            let tag = |field: &str| format!("{scope}/attributes[{i}]/{field}");
            Attribute {
                key_slug: resolve(
                    extract::attr(attribute, "name"),
                    String::new(),
                    tag("key_slug"),
                    report,
                ),
                key_name: resolve(
                    extract::attr(attribute, "localized-label"),
                    String::new(),
                    tag("key_name"),
                    report,
                ),
                value_type: optional(extract::attr(attribute, "type"), tag("value_type"), report),
                value_slug: optional(
                    extract::text(attribute, "attr:value"),
                    tag("value_slug"),
                    report,
                ),
                value_name: optional(
                    extract::attr_at(attribute, "attr:value", "localized-label"),
                    tag("value_name"),
                    report,
                ),
            }
        })
        .collect()
}

fn build_timestamps(ad: &Element, scope: &str, report: &mut ErrorReport) -> Timestamps {
    Timestamps {
        creation: optional(
            extract::timestamp(ad, "ad:creation-date-time"),
            at(scope, "timestamp/creation_time"),
            report,
        ),
        modification: optional(
            extract::timestamp(ad, "ad:modification-date-time"),
            at(scope, "timestamp/modification_time"),
            report,
        ),
        start: optional(
            extract::timestamp(ad, "ad:start-date-time"),
            at(scope, "timestamp/start_time"),
            report,
        ),
        end: optional(
            extract::timestamp(ad, "ad:end-date-time"),
            at(scope, "timestamp/end_time"),
            report,
        ),
    }
}
