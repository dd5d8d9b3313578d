// Product Catalog
// Static sample products and the per-category grouping shown as sections

use std::fmt;

/// Product category; declaration order is both section order and tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Phone,
    Tablet,
    Laptop,
    Desktop,
    Watch,
    Headphones,
    Accessories,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 7] = [
        Category::Phone,
        Category::Tablet,
        Category::Laptop,
        Category::Desktop,
        Category::Watch,
        Category::Headphones,
        Category::Accessories,
    ];

    /// The category selected when the screen first appears
    pub fn first() -> Category {
        Self::ALL[0]
    }

    /// Display label used for the tab and the section heading
    pub fn label(&self) -> &'static str {
        match self {
            Category::Phone => "Phone",
            Category::Tablet => "Tablet",
            Category::Laptop => "Laptop",
            Category::Desktop => "Desktop",
            Category::Watch => "Watch",
            Category::Headphones => "Headphones",
            Category::Accessories => "Accessories",
        }
    }

    /// Position in declaration order
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub price: String,
    pub category: Category,
}

impl Product {
    pub fn new(id: u32, category: Category, title: &str, subtitle: &str, price: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            price: price.to_string(),
            category,
        }
    }

    /// The static product list the screen is populated from
    pub fn samples() -> Vec<Product> {
        use Category::*;

        let rows: [(Category, &str, &str, &str); 20] = [
            (Phone, "Pocket Pro", "6.1\" display, triple camera", "$999"),
            (Phone, "Pocket Pro Max", "6.7\" display, all-day battery", "$1099"),
            (Phone, "Pocket", "6.1\" display, dual camera", "$799"),
            (Phone, "Pocket Mini", "5.4\" display, compact body", "$599"),
            (Tablet, "Slate Pro", "12.9\" display, pencil support", "$1099"),
            (Tablet, "Slate Air", "10.9\" display, lightweight", "$599"),
            (Tablet, "Slate Mini", "8.3\" display, fits in a pocket", "$499"),
            (Laptop, "Book Pro 14", "14\" display, 18h battery", "$1999"),
            (Laptop, "Book Pro 16", "16\" display, studio speakers", "$2499"),
            (Laptop, "Book Air", "13.6\" display, fanless", "$1199"),
            (Desktop, "Studio Tower", "Workstation, 64GB memory", "$3999"),
            (Desktop, "All-in-One 24", "24\" display, seven colours", "$1299"),
            (Watch, "Pulse Ultra", "49mm titanium case", "$799"),
            (Watch, "Pulse Series 8", "45mm aluminium case", "$429"),
            (Watch, "Pulse SE", "40mm aluminium case", "$249"),
            (Headphones, "Buds Pro", "Active noise cancellation", "$249"),
            (Headphones, "Buds", "Spatial audio, 6h listening", "$179"),
            (Headphones, "Over-Ear Max", "Over-ear, computational audio", "$549"),
            (Accessories, "MagDock Charger", "15W wireless charging", "$39"),
            (Accessories, "Tracker Tag", "Find your things", "$29"),
        ];

        rows.iter()
            .enumerate()
            .map(|(idx, (category, title, subtitle, price))| {
                Product::new(idx as u32 + 1, *category, title, subtitle, price)
            })
            .collect()
    }
}

/// Products of one category, in their original order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGroup {
    section: Category,
    pub products: Vec<Product>,
}

impl ProductGroup {
    /// Category the group was built for; identifies its section
    pub fn section(&self) -> Category {
        self.section
    }

    /// Category of the first product, or the first category for an empty group
    pub fn category(&self) -> Category {
        self.products
            .first()
            .map(|p| p.category)
            .unwrap_or_else(Category::first)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

/// Group products by category, one group per category in declaration order.
/// Empty categories are kept.
pub fn group_by_category(products: &[Product]) -> Vec<ProductGroup> {
    Category::ALL
        .iter()
        .map(|&category| ProductGroup {
            section: category,
            products: products
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_group_order_follows_declaration() {
        let groups = group_by_category(&Product::samples());
        let sections: Vec<Category> = groups.iter().map(|g| g.section()).collect();
        assert_eq!(sections, Category::ALL.to_vec());
    }

    #[test]
    fn test_empty_categories_are_kept() {
        let products = vec![Product::new(1, Category::Watch, "Pulse", "", "$1")];
        let groups = group_by_category(&products);

        assert_eq!(groups.len(), Category::ALL.len());
        assert!(groups[Category::Phone.index()].is_empty());
        assert_eq!(groups[Category::Watch.index()].len(), 1);
    }

    #[test]
    fn test_empty_group_defaults_to_first_category() {
        let groups = group_by_category(&[]);
        let tablet = &groups[Category::Tablet.index()];

        assert_eq!(tablet.category(), Category::Phone);
        assert_eq!(tablet.section(), Category::Tablet);
    }

    #[test]
    fn test_from_index_follows_tab_order() {
        assert_eq!(Category::from_index(2), Some(Category::Laptop));
        assert_eq!(Category::from_index(Category::ALL.len()), None);
    }

    fn arb_products() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec(0..Category::ALL.len(), 0..40).prop_map(|cats| {
            cats.into_iter()
                .enumerate()
                .map(|(id, c)| Product::new(id as u32, Category::ALL[c], "item", "", "$1"))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_grouping_partitions_products(products in arb_products()) {
            let groups = group_by_category(&products);

            let mut flattened: Vec<Product> = groups
                .iter()
                .flat_map(|g| g.products.iter().cloned())
                .collect();
            flattened.sort_by_key(|p| p.id);

            prop_assert_eq!(flattened, products.clone());
            for group in &groups {
                prop_assert!(group.products.iter().all(|p| p.category == group.section()));
            }
        }
    }
}
