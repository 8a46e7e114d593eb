//! 腳踏車 MRP 計算完整範例
//!
//! 展示從 BOM 建立、需求展開、可用性檢查到採購建議的流程

use mrp::{BomEdge, InMemoryCatalog, MrpCalculator, Product};
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    mrp::logging::init();
    tracing::info!("腳踏車 MRP 範例開始");

    println!("===== Bike MRP Calculation Example =====\n");

    // 步驟 1: 建立物料主檔
    println!("[1] Create Products");
    let mut catalog = InMemoryCatalog::new();
    for product in create_bike_products() {
        println!(
            "    {}: stock {}, order lead time {} days",
            product.code, product.stock_quantity, product.order_lead_time
        );
        catalog.add_product(product)?;
    }
    println!();

    // 步驟 2: 建立 BOM 結構
    println!("[2] Create BOM Structure");
    for edge in create_bike_bom() {
        println!(
            "    {} -> {} x{}",
            edge.parent_id, edge.child_id, edge.quantity_per_parent
        );
        catalog.add_bom_edge(edge)?;
    }
    println!(
        "    Products: {}, Edges: {}\n",
        catalog.product_count(),
        catalog.edge_count()
    );

    let calculator = MrpCalculator::new(catalog);
    let demand = 10;

    // 步驟 3: 需求展開
    println!("[3] Explode Requirements for {} bikes", demand);
    let requirements = calculator.explode("BIKE-001", demand)?;
    for (product_id, quantity) in requirements.iter() {
        println!("    {}: {}", product_id, quantity);
    }
    println!();

    // 步驟 4: 物料可用性
    println!("[4] Check Availability");
    let report = calculator.check_availability("BIKE-001", demand)?;
    for availability in report.iter() {
        println!(
            "    {}: required {} | available {} | shortage {}{}",
            availability.product_code,
            availability.required_quantity,
            availability.available_quantity,
            availability.shortage,
            if availability.sufficient { "" } else { "  (!)" }
        );
    }
    println!("    All sufficient: {}\n", report.all_sufficient());

    // 步驟 5: 提前期
    println!("[5] Lead Times");
    let lead_time = calculator.critical_path_lead_time("BIKE-001", demand, false)?;
    println!("    Critical path (respecting stock): {} days\n", lead_time);

    // 步驟 6: 採購建議
    println!("[6] Purchase Order Proposals");
    let proposals = calculator.propose_orders("BIKE-001", demand)?;
    for proposal in &proposals {
        println!(
            "    - {} | Qty: {} | Order: {} | Delivery: {} | Status: {} | Ref: {}",
            proposal.product_id,
            proposal.quantity,
            proposal.order_date,
            proposal.expected_delivery_date,
            proposal.status,
            proposal.reference
        );
    }

    tracing::info!("腳踏車 MRP 範例完成，採購建議 {} 筆", proposals.len());
    println!("\n===== MRP Calculation Complete =====\n");

    Ok(())
}

/// 建立腳踏車物料
fn create_bike_products() -> Vec<Product> {
    vec![
        Product::new("BIKE-001", "BIKE-001", "Bicycle")
            .with_unit("pcs")
            .as_assembly()
            .as_non_purchase(),
        Product::new("FRAME-001", "FRAME-001", "Bicycle Frame")
            .with_unit("pcs")
            .with_unit_cost(Decimal::from(120))
            .with_stock_quantity(5)
            .with_reorder_level(10)
            .with_lead_times(Decimal::from(10), Decimal::ZERO),
        Product::new("WHEEL-001", "WHEEL-001", "Wheel")
            .with_unit("pcs")
            .with_unit_cost(Decimal::from(35))
            .with_stock_quantity(15)
            .with_reorder_level(20)
            .with_lead_times(Decimal::from(7), Decimal::ZERO),
        Product::new("CHAIN-001", "CHAIN-001", "Chain")
            .with_unit("pcs")
            .with_unit_cost(Decimal::from(12))
            .with_stock_quantity(8)
            .with_reorder_level(10)
            .with_lead_times(Decimal::from(5), Decimal::ZERO),
    ]
}

/// 建立腳踏車 BOM：1 FRAME + 2 WHEEL + 1 CHAIN
fn create_bike_bom() -> Vec<BomEdge> {
    vec![
        BomEdge::new("BIKE-001", "FRAME-001", Decimal::ONE).with_sequence(10),
        BomEdge::new("BIKE-001", "WHEEL-001", Decimal::TWO).with_sequence(20),
        BomEdge::new("BIKE-001", "CHAIN-001", Decimal::ONE).with_sequence(30),
    ]
}
