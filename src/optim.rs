use log::debug;

use crate::{
    net::{Layer, Net, Param},
    Result, TrainErr,
};

/// One per-group entry of an optimizer's configuration: the parameters the
/// group holds and the weight-decay coefficient applied to them. `None`
/// leaves the optimizer's own default in place.
pub struct ParamGroup<'n> {
    pub params: Vec<&'n Param>,
    pub weight_decay: Option<f32>,
}

/// Partitions a net's parameters into a decay and a no-decay group.
///
/// Convolution and dense weights carry weight decay; their biases and every
/// normalization or affine tensor do not. Applying decay to scale/shift
/// parameters hurts generalization, so the no-decay group pins its
/// coefficient to zero explicitly.
///
/// Built once per net at setup time and handed to the optimizer; the groups
/// are not mutated afterwards.
///
/// # Errors
/// Returns `TrainErr::ParamCountMismatch` when the two groups do not cover
/// every parameter tensor of the net. That means a layer kind went
/// unclassified and the optimizer would be silently misconfigured, so the
/// caller must treat it as fatal.
pub fn split_weights(net: &Net) -> Result<[ParamGroup<'_>; 2]> {
    let mut decay: Vec<&Param> = Vec::new();
    let mut no_decay: Vec<&Param> = Vec::new();

    for layer in net.layers() {
        match layer {
            Layer::Conv2d { weight, bias } | Layer::Linear { weight, bias } => {
                decay.push(weight);

                if let Some(bias) = bias {
                    no_decay.push(bias);
                }
            }
            Layer::Norm { weight, bias } => {
                no_decay.push(weight);
                no_decay.push(bias);
            }
            Layer::Affine { weight, bias } => {
                no_decay.extend(weight.iter());
                no_decay.extend(bias.iter());
            }
            Layer::Stateless => {}
        }
    }

    let got = decay.len() + no_decay.len();
    let expected = net.num_params();

    if got != expected {
        return Err(TrainErr::ParamCountMismatch { got, expected });
    }

    debug!(
        "weight-decay split: {} decay / {} no-decay tensors",
        decay.len(),
        no_decay.len()
    );

    Ok([
        ParamGroup {
            params: decay,
            weight_decay: None,
        },
        ParamGroup {
            params: no_decay,
            weight_decay: Some(0.0),
        },
    ])
}

#[cfg(test)]
mod tests {
    use ndarray::ArrayD;

    use super::*;

    fn trainable(shape: &[usize]) -> Param {
        Param::trainable(ArrayD::zeros(shape))
    }

    #[test]
    fn conv_weight_decays_everything_else_does_not() {
        let net = Net::new([
            Layer::conv2d(trainable(&[16, 3, 3, 3]), Some(trainable(&[16]))),
            Layer::norm(trainable(&[16]), trainable(&[16])),
        ]);

        let [decay, no_decay] = split_weights(&net).unwrap();

        assert_eq!(decay.params.len(), 1);
        assert_eq!(no_decay.params.len(), 3);
        assert_eq!(decay.weight_decay, None);
        assert_eq!(no_decay.weight_decay, Some(0.0));
    }

    #[test]
    fn covers_every_tensor_of_a_mixed_net() {
        let net = Net::new([
            Layer::conv2d(trainable(&[8, 3, 3, 3]), None),
            Layer::Stateless,
            Layer::Affine {
                weight: Some(trainable(&[8])),
                bias: None,
            },
            Layer::linear(trainable(&[8, 10]), Some(trainable(&[10]))),
        ]);

        let [decay, no_decay] = split_weights(&net).unwrap();

        assert_eq!(decay.params.len() + no_decay.params.len(), net.num_params());
        assert_eq!(decay.params.len(), 2);
        assert_eq!(no_decay.params.len(), 2);
    }
}
