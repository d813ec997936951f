use anyhow::Result;
use tracing_subscriber::EnvFilter;

use mlpkit::activation::softmax;
use mlpkit::activation::Activation;
use mlpkit::activation::ActivationVariant;
use mlpkit::experiment::EpochMetrics;
use mlpkit::experiment::RunConfig;
use mlpkit::experiment::RunLogger;
use mlpkit::experiment::TracingRunLogger;
use mlpkit::matrix::Matrix;

const DEMO_EPOCHS: usize = 3;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let name = std::env::args().nth(1).unwrap_or_else(|| String::from("sigmoid"));
    let variant = ActivationVariant::from_name(&name)?;

    let mut rng = rand::thread_rng();
    let mut z: Matrix<f64> = Matrix::new(4usize, 3usize);
    z.randomize(&mut rng);

    let activated = variant.apply(&z);
    let grads = variant.derivative(&z);
    let normalized = softmax(&z);

    for j in 0..z.rows {
        println!(
            "{}({:.3?}) = {:.3?} grad {:.3?} softmax {:.3?}",
            variant.name(),
            z.row(j),
            activated.row(j),
            grads.row(j),
            normalized.row(j),
        );
    }

    let config = RunConfig::new("MLP", "mnist", DEMO_EPOCHS)
        .with_hyperparameter("activation", variant.name())
        .with_hyperparameter("learning_rate", 0.01);

    let mut run = TracingRunLogger::init("mlp-assignment", &config);

    for epoch in 0..DEMO_EPOCHS {
        let progress = (epoch + 1) as f64 / DEMO_EPOCHS as f64;

        run.log_epoch(&EpochMetrics {
            train_loss: 1.0 - 0.7 * progress,
            train_acc: 0.5 + 0.4 * progress,
            val_loss: 1.0 - 0.6 * progress,
            val_acc: 0.5 + 0.3 * progress,
            epoch,
        });
    }

    run.finish();

    Ok(())
}
