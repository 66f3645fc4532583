use core::f64::consts::{FRAC_PI_2, PI};
use proptest::prelude::*;
use sunhour::{
    cos_hour_angle, solve_hour_angle, CalendarDate, ClockTriple, EphemerisFidelity,
    EphemerisModel, GeoPosition, HourAngleResult, Threshold, TimeAngle, TimeBasis,
};
use qtty::Radians;

fn any_date() -> impl Strategy<Value = CalendarDate> {
    (1900i32..2100, 1u32..=365)
        .prop_filter_map("valid ordinal", |(y, o)| {
            chrono::NaiveDate::from_yo_opt(y, o).map(CalendarDate::from)
        })
}

fn any_basis() -> impl Strategy<Value = TimeBasis> {
    prop_oneof![
        Just(TimeBasis::LocalSolar),
        Just(TimeBasis::MeanSolar),
        Just(TimeBasis::Utc),
        (-12i32..=14).prop_map(TimeBasis::FixedOffset),
    ]
}

fn any_fidelity() -> impl Strategy<Value = EphemerisFidelity> {
    prop_oneof![
        Just(EphemerisFidelity::Orbital),
        Just(EphemerisFidelity::Sinusoidal)
    ]
}

proptest! {
    #[test]
    fn solved_hour_angle_is_in_range(
        latitude in -89.9_f64..=89.9,
        declination in -23.5_f64..=23.5,
        depth in 0usize..5,
    ) {
        let lat = Radians::new(latitude.to_radians());
        let decl = Radians::new(declination.to_radians());
        let e = Threshold::catalog()[depth].elevation_radians();
        let cos_h = cos_hour_angle(lat, decl, e);
        match solve_hour_angle(lat, decl, e) {
            HourAngleResult::Solved(h) => {
                prop_assert!((0.0..=PI).contains(&h.value()));
                prop_assert!((h.value().cos() - cos_h).abs() < 1e-9);
            }
            HourAngleResult::PolarDay => prop_assert!(cos_h < -1.0),
            HourAngleResult::PolarNight => prop_assert!(cos_h > 1.0),
        }
    }

    #[test]
    fn equator_horizon_is_quarter_turn(date in any_date(), fidelity in any_fidelity()) {
        let eph = fidelity.ephemeris(date);
        let h = solve_hour_angle(Radians::new(0.0), eph.declination, Radians::new(0.0));
        let h = h.hour_angle().unwrap();
        prop_assert!((h.value() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn ephemeris_stays_bounded(date in any_date(), fidelity in any_fidelity()) {
        let eph = fidelity.ephemeris(date);
        prop_assert!(eph.declination_degrees().value().abs() <= 23.5);
        prop_assert!(eph.equation_of_time_minutes().abs() <= 17.5);
    }

    #[test]
    fn crossings_are_symmetric_about_noon(
        hour_angle in 0.0_f64..=PI,
        longitude in -180.0_f64..=180.0,
        eot_minutes in -17.0_f64..=17.0,
        basis in any_basis(),
    ) {
        let lon = GeoPosition::from_degrees(0.0, longitude).unwrap().longitude();
        let eot = Radians::new(eot_minutes / 1_440.0 * 2.0 * PI);
        let day = basis.instants_for(Radians::new(hour_angle), lon, eot);
        prop_assert!(((day.noon - day.rise).value() - hour_angle).abs() < 1e-9);
        prop_assert!(((day.set - day.noon).value() - hour_angle).abs() < 1e-9);
    }

    #[test]
    fn rendering_is_total_and_in_range(x in -1.0e3_f64..1.0e3) {
        let clock = TimeAngle::new(x).to_clock();
        prop_assert!(clock.hours() < 24);
        prop_assert!(clock.minutes() < 60);
        prop_assert!((0.0..60.0).contains(&clock.seconds()));
        prop_assert_eq!(TimeAngle::new(x).normalized().to_clock(), clock);
    }

    #[test]
    fn whole_second_clocks_survive_the_angle(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
        let clock = ClockTriple::new(h, m, s as f64).unwrap();
        let back = TimeAngle::from(clock).to_clock();
        prop_assert_eq!((back.hours(), back.minutes(), back.whole_seconds()), (h, m, s));
    }

    #[test]
    fn deeper_thresholds_widen_the_night_edge(
        latitude in -60.0_f64..=60.0,
        date in any_date(),
    ) {
        let position = GeoPosition::from_degrees(latitude, 0.0).unwrap();
        let decl = EphemerisFidelity::Orbital.ephemeris(date).declination;
        let hour_angles: Vec<Option<f64>> = Threshold::catalog()
            .iter()
            .map(|t| {
                solve_hour_angle(position.latitude(), decl, t.elevation_radians())
                    .hour_angle()
                    .map(|h| h.value())
            })
            .collect();
        for pair in hour_angles.windows(2) {
            if let (Some(shallow), Some(deep)) = (pair[0], pair[1]) {
                prop_assert!(deep >= shallow);
            }
        }
    }
}
