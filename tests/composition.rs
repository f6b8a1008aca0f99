use approx::assert_abs_diff_eq;
use liqueur::{
    Component, Composition, DENSITY_WATER, Ingredient, LiqueurError, Measure, US_FL_OZ_ML,
};

fn vodka(ml: f64) -> Component {
    Component::new(Ingredient::alcohol(40.0, Measure::Abv).unwrap(), ml, Measure::Milliliter)
        .unwrap()
}

fn syrup(ml: f64) -> Component {
    Component::new(Ingredient::syrup(66.67, Measure::Brix).unwrap(), ml, Measure::Milliliter)
        .unwrap()
}

fn water(ml: f64) -> Component {
    Component::new(Ingredient::water(), ml, Measure::Milliliter).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Unités
// ═══════════════════════════════════════════════════════════════════

#[test]
fn every_quantity_unit_agrees() {
    let c = Component::new(Ingredient::water(), 12.0, Measure::Ounce).unwrap();
    let ml = 12.0 * US_FL_OZ_ML;
    assert_abs_diff_eq!(c.get(Measure::Milliliter).unwrap(), ml, epsilon = 1e-9);
    assert_abs_diff_eq!(c.get(Measure::Liter).unwrap(), ml / 1000.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.get(Measure::Gram).unwrap(), ml * DENSITY_WATER, epsilon = 1e-9);
    assert_abs_diff_eq!(c.get(Measure::Kilogram).unwrap(), ml * DENSITY_WATER / 1000.0, epsilon = 1e-12);
}

#[test]
fn mass_and_volume_agree_through_density() {
    let by_mass = Component::new(Ingredient::syrup(50.0, Measure::Brix).unwrap(), 1.0, Measure::Kilogram)
        .unwrap();
    let density = by_mass.ingredient().density();
    let by_volume = Component::new(
        by_mass.ingredient().clone(),
        1000.0 / density,
        Measure::Milliliter,
    )
    .unwrap();
    assert_abs_diff_eq!(by_mass.weight(), by_volume.weight(), epsilon = 1e-9);
}

#[test]
fn fget_reads_intensive_measures_from_the_ingredient() {
    let c = vodka(500.0);
    let msg = c.fget(Measure::Abv, Some(1.0)).unwrap();
    assert_eq!(msg.code, "format_alcohol_by_volume");
    assert_eq!(msg.data["value"], 40.0);

    let msg = c.fget(Measure::Liter, None).unwrap();
    assert_eq!(msg.code, "format_volume_liter");
    assert_eq!(msg.data["value"], 0.5);
}

// ═══════════════════════════════════════════════════════════════════
//  Composition
// ═══════════════════════════════════════════════════════════════════

#[test]
fn info_of_a_simple_blend() {
    let mut c = Composition::new();
    c.add("vodka", vodka(500.0)).unwrap();
    c.add("syrup", syrup(250.0)).unwrap();
    c.add("water", water(250.0)).unwrap();

    let info = c.info(None).unwrap();
    assert_abs_diff_eq!(info.volume, 1000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(info.abs_spirit, 200.0, epsilon = 1e-6);
    assert_abs_diff_eq!(info.abv, 20.0, epsilon = 1e-6);
    assert!(
        (info.sugar - 221.2).abs() < 1.0,
        "sucre = {:.2} g",
        info.sugar
    );
    assert_abs_diff_eq!(info.density, info.weight / info.volume, epsilon = 1e-12);

    let rounded = c.info(Some(0.1)).unwrap();
    assert_eq!(rounded.abv, 20.0);
    assert_eq!(rounded.volume, 1000.0);
}

#[test]
fn scale_to_any_unit() {
    let mut c = Composition::new();
    c.add("vodka", vodka(350.0)).unwrap();
    c.add("water", water(150.0)).unwrap();

    c.scale_to(2.0, Measure::Kilogram).unwrap();
    assert_abs_diff_eq!(c.total(Measure::Kilogram).unwrap(), 2.0, epsilon = 1e-12);

    c.scale_to(25.0, Measure::Ounce).unwrap();
    assert_abs_diff_eq!(c.total(Measure::Ounce).unwrap(), 25.0, epsilon = 1e-9);
}

#[test]
fn reference_is_per_litre() {
    let mut c = Composition::new();
    c.add("vodka", vodka(70.0)).unwrap();
    c.add("water", water(30.0)).unwrap();

    let reference = c.reference().unwrap();
    let info = c.info(None).unwrap();
    assert_abs_diff_eq!(reference.volume, 1000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(info.volume, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(reference.abv, info.abv, epsilon = 1e-9);
    assert_abs_diff_eq!(reference.weight, info.weight * 10.0, epsilon = 1e-6);
}

#[test]
fn degenerate_scaling_is_rejected() {
    let mut c = Composition::new();
    c.add("water", water(100.0)).unwrap();
    assert_eq!(c.scale(-1.0).unwrap_err(), LiqueurError::InvalidValue(-1.0));
    assert!(c.scale(f64::NAN).is_err());
    assert!(c.scale_to(0.0, Measure::Milliliter).is_err());
    assert_abs_diff_eq!(c.total(Measure::Milliliter).unwrap(), 100.0, epsilon = 1e-9);
}

#[test]
fn total_of_an_intensive_measure_needs_solutes() {
    let mut c = Composition::new();
    c.add("water", water(100.0)).unwrap();
    assert!(matches!(
        c.total(Measure::Abv),
        Err(LiqueurError::ConversionUnavailable { .. })
    ));
}
