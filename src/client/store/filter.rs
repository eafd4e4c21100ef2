use crate::model::shop::ProductSummaryDto;

/// Sort order of category product listings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Name,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [
        SortOrder::Name,
        SortOrder::PriceAscending,
        SortOrder::PriceDescending,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Name => "Name",
            SortOrder::PriceAscending => "Price: low to high",
            SortOrder::PriceDescending => "Price: high to low",
        }
    }

    pub fn apply(&self, products: &mut [ProductSummaryDto]) {
        match self {
            SortOrder::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOrder::PriceAscending => products.sort_by_key(|p| p.price_cents),
            SortOrder::PriceDescending => products.sort_by_key(|p| std::cmp::Reverse(p.price_cents)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, price_cents: i64) -> ProductSummaryDto {
        ProductSummaryDto {
            id: 0,
            name: name.to_string(),
            price_cents,
            url: None,
        }
    }

    fn names(products: &[ProductSummaryDto]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn sorts_by_each_order() {
        let mut products = vec![summary("Bag", 4500), summary("Tank", 2200), summary("Backpack", 5900)];

        SortOrder::Name.apply(&mut products);
        assert_eq!(names(&products), ["Backpack", "Bag", "Tank"]);

        SortOrder::PriceAscending.apply(&mut products);
        assert_eq!(names(&products), ["Tank", "Bag", "Backpack"]);

        SortOrder::PriceDescending.apply(&mut products);
        assert_eq!(names(&products), ["Backpack", "Bag", "Tank"]);
    }
}
