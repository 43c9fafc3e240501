use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Hand, Money, PlayerIndex, Rank};

/// Один перевод денег между игроками по итогам раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    pub payer: PlayerIndex,
    pub payee: PlayerIndex,
    pub amount: Money,
    /// Сумма удвоена: получатель победил, а у плательщика осталась двойка.
    pub doubled: bool,
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{} → P{}: {}", self.payer + 1, self.payee + 1, self.amount)?;
        if self.doubled {
            write!(f, " (x2)")?;
        }
        Ok(())
    }
}

/// Итог расчёта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementOutcome {
    /// Балансы после всех переводов.
    pub ledger: Vec<Money>,
    pub payments: Vec<Payment>,
    /// Хотя бы один игрок ушёл в ноль или ниже.
    pub session_over: bool,
}

impl SettlementOutcome {
    /// Изменение баланса каждого игрока относительно `before`.
    pub fn deltas(&self, before: &[Money]) -> Vec<Money> {
        self.ledger
            .iter()
            .zip(before.iter())
            .map(|(after, before)| *after - *before)
            .collect()
    }
}

/// Расчёт по итогам раздачи.
///
/// Каждая упорядоченная пара (плательщик j, получатель i) считается отдельно:
/// если у j осталось больше тайлов, чем у i, j платит разницу. Переводы не
/// взаимозачитываются. Если i победитель раздачи, а в руке j есть двойка,
/// сумма этой пары удваивается.
pub fn settle(hands: &[Hand], winner: PlayerIndex, ledger: &[Money]) -> SettlementOutcome {
    let mut ledger = ledger.to_vec();
    let mut payments = Vec::new();
    let n = hands.len().min(ledger.len());

    for payee in 0..n {
        for payer in 0..n {
            if payer == payee {
                continue;
            }

            let payer_left = hands[payer].len();
            let payee_left = hands[payee].len();
            if payer_left <= payee_left {
                continue;
            }

            let mut amount = Money((payer_left - payee_left) as i64);
            let doubled = payee == winner && hands[payer].has_rank(Rank::TWO);
            if doubled {
                amount = amount * 2;
            }

            ledger[payee] += amount;
            ledger[payer] -= amount;
            payments.push(Payment {
                payer,
                payee,
                amount,
                doubled,
            });
        }
    }

    let session_over = ledger.iter().any(Money::is_bankrupt);

    SettlementOutcome {
        ledger,
        payments,
        session_over,
    }
}
