use clap::Parser;
use log::{debug, info};
use ndarray::{ArrayD, IxDyn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use training_utils::{
    args::FindLrArgs,
    cutmix::rand_bbox,
    net::{count_params, Layer, Net, Param},
    optim::split_weights,
    schedule::{FindLr, LrSchedule},
    stats::AverageMeter,
    Result,
};

fn main() -> Result<()> {
    env_logger::init();

    let args = FindLrArgs::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let net = demo_net(&mut rng);
    info!("demo net holds {} trainable scalars", count_params(&net));

    let [decay, no_decay] = split_weights(&net)?;
    info!(
        "optimizer groups: {} decay / {} no-decay tensors",
        decay.params.len(),
        no_decay.params.len()
    );

    let mut sched = FindLr::new([args.base_lr], args.max_lr, args.iters);
    let mut loss_meter = AverageMeter::new();

    // A bowl over log-lr stands in for the per-step training loss, so the
    // sweep output still shows the characteristic range-test curve.
    let log_mid = (args.max_lr.ln() + args.base_lr.ln()) / 2.0;

    for iter in 0..args.iters {
        let lr = sched.lrs()[0];
        let loss = (lr.ln() - log_mid).powi(2) + rng.random_range(0.0..0.1);
        loss_meter.update(loss, 1);

        if args.cutmix {
            let bbox = rand_bbox(args.width, args.height, rng.random_range(0.0..1.0), &mut rng);
            debug!("iter {iter}: cutmix patch {bbox:?}");
        }

        println!(
            "iter {iter}: lr {lr:.3e} loss {loss:.4} (avg {:.4})",
            loss_meter.avg()
        );
        sched.step();
    }

    Ok(())
}

/// A small conv -> norm -> pool -> dense classifier head, randomly
/// initialized. Only the parameter layout matters here.
fn demo_net<R: Rng>(rng: &mut R) -> Net {
    Net::new([
        Layer::conv2d(
            random_param(&[16, 3, 3, 3], rng),
            Some(random_param(&[16], rng)),
        ),
        Layer::norm(random_param(&[16], rng), random_param(&[16], rng)),
        Layer::Stateless,
        Layer::linear(
            random_param(&[16, 10], rng),
            Some(random_param(&[10], rng)),
        ),
    ])
}

fn random_param<R: Rng>(shape: &[usize], rng: &mut R) -> Param {
    Param::trainable(ArrayD::from_shape_fn(IxDyn(shape), |_| {
        rng.random_range(-0.1..0.1)
    }))
}
