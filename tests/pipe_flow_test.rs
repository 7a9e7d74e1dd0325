use buckingham::analysis::{run, ParamSet, Parameter, RepeatingIssue, Validation};
use buckingham::report::format_group;
use buckingham::units::Quantity;

fn assert_power(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "power {} != {}",
        actual,
        expected
    );
}

#[test]
fn pressure_drop_groups() {
    let mut params = ParamSet::new();
    let dp = params.add(Parameter::from_exponents("DeltaP", &[1.0, -2.0, -2.0]).unwrap());
    let d = params.add(Parameter::of_quantity("D", Quantity::Length));
    let eps = params.add(Parameter::of_quantity("eps", Quantity::Length));
    let rho = params.add(Parameter::of_quantity("rho", Quantity::Density));
    let mu = params.add(Parameter::of_quantity("mu", Quantity::Viscosity));
    let v = params.add(Parameter::of_quantity("V", Quantity::Velocity));

    let analysis = run(&params, Some(&[d, rho, v]), None).unwrap();
    assert_eq!(analysis.validation, Validation::Valid);

    let subjects: Vec<_> = analysis.groups.iter().map(|g| g.subject()).collect();
    assert_eq!(subjects, vec![dp, eps, mu]);
    for group in &analysis.groups {
        assert!(group.is_dimensionless(&params));
    }

    // DeltaP D / (rho V^2)
    let pressure = &analysis.groups[0];
    assert_power(pressure.power_of(dp), 1.0);
    assert_power(pressure.power_of(d), 1.0);
    assert_power(pressure.power_of(rho), -1.0);
    assert_power(pressure.power_of(v), -2.0);

    // Relative roughness.
    let roughness = &analysis.groups[1];
    assert_power(roughness.power_of(eps), 1.0);
    assert_power(roughness.power_of(d), -1.0);
    assert_eq!(roughness.power_of(rho), 0.0);
    assert_eq!(roughness.power_of(v), 0.0);
    assert_eq!(format_group(&params, roughness), "(eps) (D)^-1");

    // Reynolds number: the inverse orientation has more positive powers.
    let reynolds = &analysis.groups[2];
    assert_power(reynolds.power_of(mu), -1.0);
    assert_power(reynolds.power_of(d), 1.0);
    assert_power(reynolds.power_of(rho), 1.0);
    assert_power(reynolds.power_of(v), 1.0);
    assert!(format_group(&params, reynolds).ends_with("(mu)^-1"));
}

#[test]
fn dependent_repeating_override_is_flagged_but_used() {
    let mut params = ParamSet::new();
    let dp = params.add(Parameter::from_exponents("DeltaP", &[1.0, -2.0, -2.0]).unwrap());
    let d = params.add(Parameter::of_quantity("D", Quantity::Length));
    let eps = params.add(Parameter::of_quantity("eps", Quantity::Length));
    params.add(Parameter::of_quantity("rho", Quantity::Density));
    params.add(Parameter::of_quantity("mu", Quantity::Viscosity));
    let v = params.add(Parameter::of_quantity("V", Quantity::Velocity));

    // D and eps are both lengths, so this set only spans two dimensions.
    let analysis = run(&params, Some(&[d, eps, v]), None).unwrap();
    assert_eq!(
        analysis.validation,
        Validation::Invalid(RepeatingIssue::NotIndependent {
            expected: 3,
            rank: 2
        })
    );
    assert_eq!(analysis.repeating, vec![d, eps, v]);
    assert_eq!(analysis.groups.len(), 3);

    // Every group degenerates to D/eps and drops its own subject.
    let first = &analysis.groups[0];
    assert_eq!(first.subject(), dp);
    assert_eq!(first.power_of(dp), 0.0);
    assert_power(first.power_of(d), 1.0);
    assert_power(first.power_of(eps), -1.0);
    for group in &analysis.groups {
        assert_eq!(group.power_of(group.subject()), 0.0);
        assert!(group.is_dimensionless(&params));
    }
}
