use pricecraft_core::pricing::{
    CategoryDescriptor, CategoryResolution, PricingResult, ShippingResolution, ShippingTable,
};
use rust_decimal::{Decimal, RoundingStrategy};

/// Two-decimal rendering, half away from zero.
pub fn money(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

pub fn render_result(result: &PricingResult) -> String {
    let mut lines = vec![format!(
        "Pricing {} for {} ({})",
        result.product_name,
        result.customer_name,
        result.category_key.as_str()
    )];

    lines.push(format!("   Base price: {}", money(result.base_price)));
    let discount_label = match result.category_resolution {
        CategoryResolution::Registered => result.category_key.as_str().to_string(),
        CategoryResolution::FallbackToStandard => {
            format!("standard (unrecognised category `{}`)", result.category_key.as_str())
        }
    };
    lines.push(format!("   Discount {discount_label}: -{}", money(result.discount)));
    lines.push(format!("   Loyalty points earned: {}", result.loyalty_points));

    let shipping_note = match result.shipping_resolution {
        ShippingResolution::Listed => "",
        ShippingResolution::Default => " (default rate)",
    };
    lines.push(format!("   Shipping: +{}{shipping_note}", money(result.shipping)));
    lines.push(format!("   Final price: {}", money(result.final_price)));

    lines.join("\n")
}

pub fn render_categories(categories: &[CategoryDescriptor], shipping: &ShippingTable) -> String {
    let mut lines = vec!["customer categories:".to_string()];
    for descriptor in categories {
        let detail = match descriptor.rate_card {
            Some(card) => format!(
                "discount {}%, 1 point per {} spent",
                (card.discount_rate * Decimal::ONE_HUNDRED).normalize(),
                card.loyalty_tranche
            ),
            None => "custom strategies".to_string(),
        };
        lines.push(format!("- {} = {detail}", descriptor.key.as_str()));
    }

    lines.push("shipping surcharges:".to_string());
    for (category, surcharge) in shipping.rates() {
        lines.push(format!("- {} = {}", category.as_str(), money(surcharge)));
    }
    lines.push(format!("- <default> = {}", money(shipping.default_surcharge())));

    lines.join("\n")
}
