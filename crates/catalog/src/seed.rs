//! Built-in furniture catalog.

use storefront_core::{CategoryId, Price, ProductId};

use crate::category::Category;
use crate::product::Product;

pub const BEDS: CategoryId = CategoryId::new(1);
pub const TABLES: CategoryId = CategoryId::new(2);
pub const ENTRYWAY: CategoryId = CategoryId::new(3);
pub const KITCHENS: CategoryId = CategoryId::new(4);

pub fn categories() -> Vec<Category> {
    vec![
        Category::new(BEDS, "Кровати"),
        Category::new(TABLES, "Столы"),
        Category::new(ENTRYWAY, "Прихожие"),
        Category::new(KITCHENS, "Кухни"),
    ]
}

fn bed(id: u32, name: &str, color: &str, size: &str, rubles: u64) -> Product {
    Product::new(ProductId::new(id), BEDS, name, Price::rubles(rubles))
        .with_color(color)
        .with_size(size)
}

fn table(id: u32, name: &str, color: &str, material: &str, rubles: u64) -> Product {
    Product::new(ProductId::new(id), TABLES, name, Price::rubles(rubles))
        .with_color(color)
        .with_material(material)
}

fn entryway(id: u32, name: &str, color: &str, size: &str, rubles: u64) -> Product {
    Product::new(ProductId::new(id), ENTRYWAY, name, Price::rubles(rubles))
        .with_color(color)
        .with_size(size)
}

pub fn products() -> Vec<Product> {
    vec![
        bed(1, "Кровать-Сити", "Белый", "200*90*65", 20000),
        bed(2, "Кровать-Рим", "Зеленый", "220*220*70", 47000),
        bed(3, "Кровать-Уют", "Синий", "200*90*65", 24000),
        bed(4, "Кровать-Уют", "Белый", "200*90*65", 25000),
        bed(5, "Кровать-Венсен", "Белый", "190*85*60", 17000),
        bed(6, "Кровать-Уют", "Коричневый", "200*90*65", 29000),
        table(7, "Стол-Wood", "Коричневый", "Дуб", 7000),
        table(8, "Стол-ССТ4", "Серый", "Пластик", 2500),
        table(9, "Стол-Престиж", "Белый", "Аллюминий", 3200),
        table(10, "Стол-Престиж", "Желтый", "Аллюминий", 3200),
        entryway(11, "Прихожая-Грейс", "Черный", "200*60*250", 80000),
        entryway(12, "Прихожая-Престиж", "Белый", "100*30*250", 35700),
        entryway(13, "Прихожая-Грейс", "Бежевый", "200*60*250", 80000),
        entryway(14, "Прихожая-Грейс XL", "Черный", "240*800*250", 100000),
        entryway(15, "Прихожая-Сицилия", "Голубой", "150*30*250", 35000),
        entryway(16, "Прихожая-БН208", "Розовый", "200*60*250", 80000),
    ]
}
