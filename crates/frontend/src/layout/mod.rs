pub mod header;
pub mod sidebar;

use leptos::prelude::*;

/// Which page fills the content pane. Keys follow the module numbering
/// (`a00x_` master data, `d40x_` dashboards).
#[derive(Clone, Copy)]
pub struct ActiveSection(pub RwSignal<&'static str>);

pub const DEFAULT_SECTION: &str = "d400_overview";

pub fn provide_active_section() -> ActiveSection {
    let section = ActiveSection(RwSignal::new(DEFAULT_SECTION));
    provide_context(section);
    section
}

pub fn use_active_section() -> ActiveSection {
    use_context::<ActiveSection>().expect("ActiveSection not found in context")
}

pub fn section_label(key: &str) -> &'static str {
    match key {
        "d400_overview" => "Ringkasan",
        "a001_category" => "Kategori",
        "a002_product" => "Produk",
        "a003_branch" => "Cabang",
        "a004_distributor" => "Distributor",
        "a005_customer" => "Pelanggan & Piutang",
        "a006_user" => "Pengguna",
        "a007_role" => "Peran",
        "d401_sales_report" => "Laporan Penjualan",
        "d402_financial_report" => "Laporan Keuangan",
        _ => "Ringkasan",
    }
}
