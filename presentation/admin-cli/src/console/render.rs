use business::application::product::state::ProductCollectionState;
use business::domain::auth::model::User;
use business::domain::product::metrics::{
    DashboardMetrics, StockStatus, display_price, format_amount,
};
use business::domain::product::model::Product;
use business::domain::validation::ValidationErrors;

pub fn validation_errors(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        eprintln!("  {}: {}", field, message);
    }
}

pub fn user(user: &User) {
    println!("{} <{}> (id: {})", user.name, user.email, user.id);
}

pub fn users(users: &[User]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }
    for entry in users {
        user(entry);
    }
}

pub fn product(product: &Product) {
    println!("{}", product.name);
    println!("  id:          {}", product.id);
    println!("  category:    {}", product.category);
    println!("  price:       {}", format_amount(display_price(product.price)));
    println!(
        "  stock:       {} ({})",
        product.stock,
        StockStatus::of(product.stock)
    );
    println!("  description: {}", product.description);
    println!("  created:     {}", product.created_at.format("%Y-%m-%d %H:%M"));
    println!("  updated:     {}", product.updated_at.format("%Y-%m-%d %H:%M"));
}

pub fn product_page(state: &ProductCollectionState) {
    if state.products.is_empty() {
        println!("No products found.");
    } else {
        println!(
            "{:<26} {:<32} {:<16} {:>14} {:>7}  {}",
            "ID", "NAME", "CATEGORY", "PRICE", "STOCK", "STATUS"
        );
        for product in &state.products {
            println!(
                "{:<26} {:<32} {:<16} {:>14} {:>7}  {}",
                product.id.as_str(),
                truncate(&product.name, 32),
                truncate(&product.category, 16),
                format_amount(display_price(product.price)),
                product.stock,
                StockStatus::of(product.stock)
            );
        }
    }
    println!(
        "Page {} of {} ({} products, {} per page)",
        state.current_page,
        state.total_pages.max(1),
        state.total_items,
        state.items_per_page
    );
}

pub fn metrics(metrics: &DashboardMetrics) {
    println!("Products on page: {}", metrics.product_count);
    println!("Stock value:      {}", format_amount(metrics.stock_value));
    println!("Out of stock:     {}", metrics.out_of_stock);
    println!("Average price:    {}", format_amount(metrics.average_price));
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_short_values_intact() {
        assert_eq!(truncate("Lamp", 10), "Lamp");
    }

    #[test]
    fn should_truncate_long_values_to_width() {
        let truncated = truncate("Ergonomic standing desk", 10);

        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('…'));
    }
}
