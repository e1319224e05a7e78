use crate::errors::Error;
use crate::rate::tokens_for;
use crate::types::ContributionReceipt;

/// Splits an offered amount into the part the sale can still take and the
/// part that goes back to the sender.
///
/// The sale has two ceilings: `cap_amount` in payment units and the unsold
/// reserve in asset units. The reserve is converted to payment units at the
/// current `inverse_unit`, and whichever ceiling is lower bounds the
/// accepted amount. Only the accepted part earns tokens.
pub fn split(
    offered: i128,
    inverse_unit: i128,
    cap_amount: i128,
    total_raised: i128,
    tokens_remaining: i128,
) -> Result<ContributionReceipt, Error> {
    if offered <= 0 || inverse_unit <= 0 {
        return Err(Error::InvalidAmount);
    }

    let payment_room = cap_amount
        .checked_sub(total_raised)
        .ok_or(Error::ArithmeticOverflow)?
        .max(0);
    // Saturation is exact here: the result is clipped by `payment_room`.
    let token_room = tokens_remaining.max(0).saturating_mul(inverse_unit);
    let remaining_capacity = payment_room.min(token_room);

    let (accepted, refunded) = if offered <= remaining_capacity {
        (offered, 0)
    } else {
        (remaining_capacity, offered - remaining_capacity)
    };
    let tokens = tokens_for(accepted, inverse_unit).min(tokens_remaining.max(0));

    Ok(ContributionReceipt {
        accepted,
        refunded,
        tokens,
    })
}
