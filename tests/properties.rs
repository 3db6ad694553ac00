use std::f64::consts::{ PI, TAU };
use proptest::prelude::*;
use rabi_bloch::{
    error::RabiError,
    dynamics::{ Propagator, RabiParams },
    hilbert::{ StateNorm, psi0 },
    rotation::{ Ry, Rz, is_unitary },
    bloch::Trajectory,
};

const TOL: f64 = 1e-9;

fn drive() -> impl Strategy<Value = RabiParams> {
    (-5.0..5.0_f64, 0.0..10.0_f64, 0.01..3.0_f64)
        .prop_map(|(detuning, photons, coupling)| {
            RabiParams { detuning, photons: photons + 0.1, coupling }
        })
}

// couplings at or near zero, where the mixing angle approaches its poles
fn weak_drive() -> impl Strategy<Value = RabiParams> {
    (
        -5.0..5.0_f64,
        prop_oneof![Just(0.0), 1e-6..2.0_f64],
        prop_oneof![Just(0.0), 1e-9..1e-3_f64],
    )
        .prop_map(|(detuning, photons, coupling)| {
            RabiParams { detuning, photons, coupling }
        })
}

proptest! {
    #[test]
    fn initial_state_is_normalized(theta in -TAU..TAU, phi in -TAU..TAU) {
        prop_assert!((psi0(theta, phi).norm() - 1.0).abs() < TOL);
    }

    #[test]
    fn rotations_are_unitary(theta in -4.0 * PI..4.0 * PI) {
        prop_assert!(is_unitary(&Ry(theta), TOL));
        prop_assert!(is_unitary(&Rz(theta), TOL));
    }

    #[test]
    fn rabi_freq_bounds_detuning(params in drive()) {
        let omega = params.rabi_freq().unwrap();
        prop_assert!(omega >= 0.0);
        prop_assert!(omega >= params.detuning.abs());
    }

    #[test]
    fn mixing_angle_in_range(params in drive()) {
        let a = params.mixing_angle().unwrap();
        prop_assert!(a.is_finite());
        prop_assert!((0.0..=PI).contains(&a));
    }

    #[test]
    fn propagator_preserves_norm(
        params in drive(),
        t in -20.0..20.0_f64,
        theta in 0.0..PI,
        phi in 0.0..TAU,
    ) {
        let prop = Propagator::new(params).unwrap();
        prop_assert!(is_unitary(&prop.at(t), TOL));
        let psi = prop.apply(t, &psi0(theta, phi)).unwrap();
        prop_assert!((psi.norm() - 1.0).abs() < TOL);
    }

    #[test]
    fn trajectory_stays_on_sphere(
        params in drive(),
        theta in 0.0..PI,
        phi in 0.0..TAU,
        samples in 1usize..64,
    ) {
        let traj = Trajectory::sample(&psi0(theta, phi), &params, samples).unwrap();
        prop_assert_eq!(traj.len(), samples);
        for p in traj.points() {
            let r2 = p.x * p.x + p.y * p.y + p.z * p.z;
            prop_assert!((r2 - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn sampling_is_deterministic(params in drive(), theta in 0.0..PI, samples in 1usize..32) {
        let psi = psi0(theta, 0.0);
        let a = Trajectory::sample(&psi, &params, samples).unwrap();
        let b = Trajectory::sample(&psi, &params, samples).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn weak_coupling_mixing_angle(params in weak_drive(), theta in 0.0..PI) {
        let uncoupled = params.coupling == 0.0 || params.photons == 0.0;
        match params.mixing_angle() {
            Err(RabiError::DegenerateMixingAngle { .. }) => {
                prop_assert!(uncoupled && params.detuning <= 0.0);
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
            Ok(a) => {
                prop_assert!(!(uncoupled && params.detuning <= 0.0));
                prop_assert!((0.0..=PI).contains(&a));
                if params.detuning < 0.0 { prop_assert!(a > PI / 2.0); }
                if params.detuning > 0.0 { prop_assert!(a < PI / 2.0); }
                let traj = Trajectory::sample(&psi0(theta, 0.0), &params, 16).unwrap();
                prop_assert!(traj.max_radius_error() < TOL);
            }
        }
    }
}
